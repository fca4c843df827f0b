//! Relevance labels used as training targets by both backends.

use basket_core::config::TrainingConfig;
use basket_core::models::{FeatureLayout, FeatureVector, HistoryProfile};
use basket_core::traits::TrainingExample;

/// Fraction of the product's tags that appear anywhere in the history.
pub fn tag_overlap(
    features: &FeatureVector,
    layout: &FeatureLayout,
    profile: &HistoryProfile,
) -> f64 {
    let mut total = 0usize;
    let mut seen = 0usize;
    for tag in features.tag_indices(layout) {
        total += 1;
        if profile.has_seen_tag(tag) {
            seen += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        seen as f64 / total as f64
    }
}

/// Share of the history in the product's category.
pub fn category_share(
    features: &FeatureVector,
    layout: &FeatureLayout,
    profile: &HistoryProfile,
) -> f64 {
    features
        .category_index(layout)
        .map_or(0.0, |c| profile.category_share(c))
}

/// 1.0 for purchased products, otherwise a capped blend of category
/// frequency and tag overlap.
pub fn relevance(
    example: &TrainingExample,
    layout: &FeatureLayout,
    profile: &HistoryProfile,
    config: &TrainingConfig,
) -> f64 {
    if example.purchased {
        return 1.0;
    }
    let blend = config.label_category_weight * category_share(&example.features, layout, profile)
        + config.label_tag_weight * tag_overlap(&example.features, layout, profile);
    blend.min(config.label_cap).max(0.0)
}
