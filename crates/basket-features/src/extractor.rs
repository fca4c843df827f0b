//! FeatureExtractor: product × history → FeatureVector.

use basket_core::config::FeatureConfig;
use basket_core::constants::EMPTY_HISTORY_PRICE_DEVIATION;
use basket_core::errors::{ValidationError, ValidationResult};
use basket_core::models::{FeatureLayout, FeatureVector, HistoryProfile};
use basket_core::{Catalog, Product, UserHistory};

use crate::profile;

/// Deterministic feature extractor with a catalog-frozen layout.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    layout: FeatureLayout,
    reference_price: f64,
}

impl FeatureExtractor {
    pub fn new(catalog: &Catalog, config: &FeatureConfig) -> Self {
        let reference_price = config
            .max_reference_price
            .unwrap_or_else(|| catalog.max_price());
        Self {
            layout: FeatureLayout::from_catalog(catalog),
            reference_price: if reference_price > 0.0 {
                reference_price
            } else {
                1.0
            },
        }
    }

    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    /// Vector length for this catalog.
    pub fn dim(&self) -> usize {
        self.layout.dim()
    }

    /// Digest a history once so it can be shared across a whole pass.
    pub fn profile(&self, history: &UserHistory) -> HistoryProfile {
        profile::build(&self.layout, history)
    }

    /// Extract against a raw history.
    pub fn extract(
        &self,
        product: &Product,
        history: &UserHistory,
    ) -> ValidationResult<FeatureVector> {
        self.extract_with_profile(product, &self.profile(history))
    }

    /// Extract against a prebuilt profile.
    pub fn extract_with_profile(
        &self,
        product: &Product,
        profile: &HistoryProfile,
    ) -> ValidationResult<FeatureVector> {
        let category = self.validate(product)?;
        let mut values = vec![0.0; self.layout.dim()];

        values[category] = 1.0;

        let tag_offset = self.layout.tag_offset();
        for tag in product.tag_list() {
            if let Some(idx) = self.layout.tag_index(tag) {
                values[tag_offset + idx] = 1.0;
            }
        }

        let derived = self.layout.derived_offset();
        values[derived] = (product.price / self.reference_price).min(1.0);
        match profile.price_band {
            Some(band) => {
                let mean = if band.mean > 0.0 { band.mean } else { 1.0 };
                values[derived + 1] = ((product.price - band.mean).abs() / mean).min(1.0);
                values[derived + 2] = if band.contains(product.price) { 1.0 } else { 0.0 };
            }
            None => {
                values[derived + 1] = EMPTY_HISTORY_PRICE_DEVIATION;
                values[derived + 2] = 0.0;
            }
        }

        Ok(FeatureVector::new(values))
    }

    /// Check a product is well formed; returns its layout category index.
    pub fn validate(&self, product: &Product) -> ValidationResult<usize> {
        let name = product
            .category_name()
            .ok_or(ValidationError::MissingCategory { id: product.id })?;
        let category =
            self.layout
                .category_index(name)
                .ok_or_else(|| ValidationError::UnknownCategory {
                    id: product.id,
                    category: name.to_string(),
                })?;
        if product.tags.is_none() {
            return Err(ValidationError::MissingTags { id: product.id });
        }
        if !(product.price.is_finite() && product.price > 0.0) {
            return Err(ValidationError::InvalidPrice {
                id: product.id,
                price: product.price,
            });
        }
        Ok(category)
    }
}
