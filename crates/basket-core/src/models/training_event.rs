use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the append-only training log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingEvent {
    /// Generation reached by this pass (1 for the first pass).
    pub generation: u64,
    /// History length the pass trained on.
    pub num_purchases: usize,
    /// Mean squared error against the relevance labels after the update.
    pub loss: f64,
    pub timestamp: DateTime<Utc>,
}
