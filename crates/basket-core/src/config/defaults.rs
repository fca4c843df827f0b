//! Compiled defaults for every config field.

// Features
pub const DEFAULT_MAX_REFERENCE_PRICE: Option<f64> = None;

// Scoring
pub const DEFAULT_SEED: u64 = 0x5eed_ba5e;
pub const DEFAULT_PRIOR_CEILING: f64 = 0.3;
pub const DEFAULT_CATEGORY_AFFINITY: f64 = 3.0;
pub const DEFAULT_PRICE_BAND_BONUS: f64 = 1.5;
pub const DEFAULT_PRICE_PROXIMITY: f64 = 2.0;
pub const DEFAULT_TAG_OVERLAP: f64 = 2.5;
pub const DEFAULT_OVERREPRESENTATION_RATIO: f64 = 0.5;
pub const DEFAULT_DIVERSITY_PENALTY: f64 = 0.3;
pub const DEFAULT_RECENCY_BONUS: f64 = 1.2;
pub const DEFAULT_HIDDEN_LAYERS: [usize; 2] = [16, 8];

// Training
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_WEIGHT_MIN: f64 = 0.3;
pub const DEFAULT_WEIGHT_MAX: f64 = 2.5;
pub const DEFAULT_ABSENT_DECAY_FRACTION: f64 = 0.1;
pub const DEFAULT_INITIAL_WEIGHT_MIN: f64 = 0.5;
pub const DEFAULT_INITIAL_WEIGHT_MAX: f64 = 1.0;
pub const DEFAULT_INITIAL_DIVERSITY_INDEX: f64 = 0.5;
pub const DEFAULT_EPOCHS: usize = 40;
pub const DEFAULT_NEURAL_LEARNING_RATE: f64 = 0.05;
pub const DEFAULT_LABEL_CAP: f64 = 0.7;
pub const DEFAULT_LABEL_CATEGORY_WEIGHT: f64 = 0.5;
pub const DEFAULT_LABEL_TAG_WEIGHT: f64 = 0.5;
pub const DEFAULT_MAX_EXAMPLES: usize = 100_000;

// Ranking
pub const DEFAULT_BASE_QUOTA: usize = 3;
pub const DEFAULT_FLOOR_RATIO: f64 = 0.7;
pub const DEFAULT_FLOOR_MINIMUM: f64 = 0.2;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
