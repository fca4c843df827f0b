use serde::{Deserialize, Serialize};

use super::defaults;

/// Training configuration shared by both scorer backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Heuristic step size applied to `category_share`.
    pub learning_rate: f64,
    /// Floor for per-category weights.
    pub weight_min: f64,
    /// Ceiling for per-category weights.
    pub weight_max: f64,
    /// Fraction of each step subtracted from categories never purchased.
    pub absent_decay_fraction: f64,
    /// Range the untrained per-category weights are drawn from.
    pub initial_weight_min: f64,
    pub initial_weight_max: f64,
    /// Diversity index before the first pass.
    pub initial_diversity_index: f64,
    /// SGD passes over the batch (neural backend).
    pub epochs: usize,
    /// SGD step size (neural backend).
    pub neural_learning_rate: f64,
    /// Cap on the partial-relevance label of unpurchased products.
    pub label_cap: f64,
    pub label_category_weight: f64,
    pub label_tag_weight: f64,
    /// Batches larger than this fail with `ResourceExhausted`.
    pub max_examples: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            weight_min: defaults::DEFAULT_WEIGHT_MIN,
            weight_max: defaults::DEFAULT_WEIGHT_MAX,
            absent_decay_fraction: defaults::DEFAULT_ABSENT_DECAY_FRACTION,
            initial_weight_min: defaults::DEFAULT_INITIAL_WEIGHT_MIN,
            initial_weight_max: defaults::DEFAULT_INITIAL_WEIGHT_MAX,
            initial_diversity_index: defaults::DEFAULT_INITIAL_DIVERSITY_INDEX,
            epochs: defaults::DEFAULT_EPOCHS,
            neural_learning_rate: defaults::DEFAULT_NEURAL_LEARNING_RATE,
            label_cap: defaults::DEFAULT_LABEL_CAP,
            label_category_weight: defaults::DEFAULT_LABEL_CATEGORY_WEIGHT,
            label_tag_weight: defaults::DEFAULT_LABEL_TAG_WEIGHT,
            max_examples: defaults::DEFAULT_MAX_EXAMPLES,
        }
    }
}
