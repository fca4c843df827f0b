mod history_store;
mod scorer;

pub use history_store::IHistoryStore;
pub use scorer::{IScorer, TrainingBatch, TrainingExample};
