//! Value types exchanged between the engine components.

mod features;
mod parameters;
mod recommendation;
mod score;
mod stats;
mod training_event;

pub use features::{FeatureLayout, FeatureVector, HistoryProfile, PriceBand};
pub use parameters::{DenseLayer, ModelParameters};
pub use recommendation::Recommendation;
pub use score::Score;
pub use stats::{ModelStats, RecommendationBatch};
pub use training_event::TrainingEvent;
