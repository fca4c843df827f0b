use crate::catalog::ProductId;
use crate::config::ScorerBackend;
use crate::errors::TrainingError;
use crate::history::UserHistory;
use crate::models::{FeatureLayout, FeatureVector, HistoryProfile, ModelParameters, Score};

/// One catalog product prepared for a training pass.
#[derive(Debug, Clone)]
pub struct TrainingExample {
    pub product_id: ProductId,
    pub features: FeatureVector,
    /// True when the product appears in the history being trained on.
    pub purchased: bool,
}

/// Everything a scorer needs for one training pass.
#[derive(Debug, Clone)]
pub struct TrainingBatch<'a> {
    pub history: &'a UserHistory,
    pub profile: &'a HistoryProfile,
    pub layout: &'a FeatureLayout,
    pub examples: Vec<TrainingExample>,
}

/// Scoring capability shared by the heuristic and trainable models.
///
/// `predict` is pure given fixed parameters. `fit` must be atomic: on error
/// the parameters are exactly what they were before the call.
pub trait IScorer: Send + Sync {
    fn backend(&self) -> ScorerBackend;

    /// Relevance of one feature vector for the profiled history.
    fn predict(&self, features: &FeatureVector, profile: &HistoryProfile) -> Score;

    /// Update parameters from a non-empty history. Returns the post-update loss.
    fn fit(&mut self, batch: &TrainingBatch<'_>) -> Result<f64, TrainingError>;

    /// Snapshot of the current parameters.
    fn parameters(&self) -> ModelParameters;

    /// Return to the untrained prior.
    fn reset(&mut self);
}
