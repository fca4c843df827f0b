use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which scoring realization backs the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerBackend {
    #[default]
    Heuristic,
    Neural,
}

impl fmt::Display for ScorerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerBackend::Heuristic => write!(f, "heuristic"),
            ScorerBackend::Neural => write!(f, "neural"),
        }
    }
}

impl FromStr for ScorerBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heuristic" => Ok(ScorerBackend::Heuristic),
            "neural" => Ok(ScorerBackend::Neural),
            other => Err(format!("unknown scorer backend {other:?}")),
        }
    }
}

/// Heuristic factor coefficients, summed before the logistic squash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Multiplier on `category_share × category_weight`.
    pub category_affinity: f64,
    /// Flat bonus when the price falls within the historical band.
    pub price_band_bonus: f64,
    /// Multiplier on `1 − price_deviation`.
    pub price_proximity: f64,
    /// Multiplier on the fraction of the product's tags seen in history.
    pub tag_overlap: f64,
    /// Category share above which the diversity penalty applies.
    pub overrepresentation_ratio: f64,
    /// Penalty strength, scaled by the learned diversity index.
    pub diversity_penalty: f64,
    /// Bonus when the category appears among the most recent purchases.
    pub recency_bonus: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            category_affinity: defaults::DEFAULT_CATEGORY_AFFINITY,
            price_band_bonus: defaults::DEFAULT_PRICE_BAND_BONUS,
            price_proximity: defaults::DEFAULT_PRICE_PROXIMITY,
            tag_overlap: defaults::DEFAULT_TAG_OVERLAP,
            overrepresentation_ratio: defaults::DEFAULT_OVERREPRESENTATION_RATIO,
            diversity_penalty: defaults::DEFAULT_DIVERSITY_PENALTY,
            recency_bonus: defaults::DEFAULT_RECENCY_BONUS,
        }
    }
}

/// Scoring model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub backend: ScorerBackend,
    /// Seed for every pseudo-random draw (initial weights, untrained prior).
    pub seed: u64,
    /// Exclusive upper bound of the untrained heuristic prior.
    pub prior_ceiling: f64,
    pub heuristic: HeuristicWeights,
    /// Hidden layer widths of the neural scorer, input side first.
    pub hidden_layers: Vec<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            backend: ScorerBackend::default(),
            seed: defaults::DEFAULT_SEED,
            prior_ceiling: defaults::DEFAULT_PRIOR_CEILING,
            heuristic: HeuristicWeights::default(),
            hidden_layers: defaults::DEFAULT_HIDDEN_LAYERS.to_vec(),
        }
    }
}
