use serde::{Deserialize, Serialize};

use super::defaults;

/// Score floor for same-category repeats once the base quota is filled.
///
/// The 0.7 ratio and 0.2 minimum are tuning values pending product review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreFloorConfig {
    /// Fraction of the mean candidate score.
    pub ratio: f64,
    /// Absolute lower bound of the derived floor.
    pub minimum: f64,
    /// Replaces the derived floor entirely when set.
    pub fixed: Option<f64>,
}

impl ScoreFloorConfig {
    /// Resolve the floor for a candidate pool with the given mean score.
    pub fn resolve(&self, mean_score: f64) -> f64 {
        match self.fixed {
            Some(floor) => floor,
            None => (mean_score * self.ratio).max(self.minimum),
        }
    }
}

impl Default for ScoreFloorConfig {
    fn default() -> Self {
        Self {
            ratio: defaults::DEFAULT_FLOOR_RATIO,
            minimum: defaults::DEFAULT_FLOOR_MINIMUM,
            fixed: None,
        }
    }
}

/// Diversity ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Slots filled before same-category repeats are constrained.
    pub base_quota: usize,
    pub floor: ScoreFloorConfig,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            base_quota: defaults::DEFAULT_BASE_QUOTA,
            floor: ScoreFloorConfig::default(),
        }
    }
}
