/// Training failures. A failed pass leaves parameters and generation untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainingError {
    #[error("optimization diverged at epoch {epoch}: loss {loss}")]
    Diverged { epoch: usize, loss: f64 },

    #[error("resource exhausted: {examples} training examples exceed limit {limit}")]
    ResourceExhausted { examples: usize, limit: usize },

    #[error("feature dimension mismatch: model expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
