//! # basket-learning
//!
//! Continual-learning loop over a scorer: every successful pass over a
//! non-empty history advances the generation by one and appends a
//! [`TrainingEvent`](basket_core::TrainingEvent).

pub mod batch;
pub mod trainer;

pub use trainer::Trainer;
