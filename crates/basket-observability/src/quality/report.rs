use serde::{Deserialize, Serialize};

/// One point of the loss trend, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossPoint {
    pub generation: u64,
    pub loss_pct: f64,
    pub num_purchases: usize,
}

/// Offline quality figures for one recommendation list.
///
/// Every percentage lies in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Category and tag agreement of the top six with the last five purchases.
    pub precision_at_k: f64,
    /// Share of recommendations scoring above the dynamic threshold.
    pub hit_rate: f64,
    /// Number of recommendations above the dynamic threshold.
    pub hits: usize,
    /// Distinct recommended categories over catalog categories (coverage).
    pub diversity: f64,
    /// Share of recommendations in a category among the last ten purchases.
    pub relevance: f64,
    /// Share of recommendations outside the favourite category.
    pub novelty: f64,
    /// `(max - min) / max` over recommendation scores.
    pub confidence_spread: f64,
    /// `1 - loss` of the latest training pass.
    pub accuracy: f64,
    pub mean_score: f64,
    /// Up to the last five training passes, oldest first.
    pub loss_trend: Vec<LossPoint>,
}

impl QualityReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
