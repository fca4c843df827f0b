//! Training batch assembly.

use tracing::warn;

use basket_core::errors::ValidationError;
use basket_core::models::HistoryProfile;
use basket_core::traits::TrainingExample;
use basket_core::{Catalog, UserHistory};
use basket_features::FeatureExtractor;

/// One example per well-formed catalog product. Malformed products are
/// returned separately and left out of the batch.
pub fn build_examples(
    extractor: &FeatureExtractor,
    catalog: &Catalog,
    history: &UserHistory,
    profile: &HistoryProfile,
) -> (Vec<TrainingExample>, Vec<ValidationError>) {
    let purchased = history.purchased_ids();
    let mut examples = Vec::with_capacity(catalog.len());
    let mut rejected = Vec::new();

    for product in catalog.products() {
        match extractor.extract_with_profile(product, profile) {
            Ok(features) => examples.push(TrainingExample {
                product_id: product.id,
                features,
                purchased: purchased.contains(&product.id),
            }),
            Err(err) => {
                warn!(
                    product_id = product.id,
                    error = %err,
                    "product excluded from training batch"
                );
                rejected.push(err);
            }
        }
    }

    (examples, rejected)
}
