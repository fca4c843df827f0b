use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Price that maps to 1.0 in the normalized price feature.
    /// `None` uses the catalog's maximum price.
    pub max_reference_price: Option<f64>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            max_reference_price: defaults::DEFAULT_MAX_REFERENCE_PRICE,
        }
    }
}
