use serde::{Deserialize, Serialize};

use super::{ModelParameters, Recommendation, TrainingEvent};

/// Snapshot of the scoring model's training state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub generation: u64,
    pub parameters: ModelParameters,
    pub training_log: Vec<TrainingEvent>,
}

impl ModelStats {
    /// The most recent training event, if any pass has run.
    pub fn latest_event(&self) -> Option<&TrainingEvent> {
        self.training_log.last()
    }
}

/// Result of one train-then-recommend pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBatch {
    pub recommendations: Vec<Recommendation>,
    pub stats: ModelStats,
}
