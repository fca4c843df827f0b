//! # basket-observability
//!
//! Structured tracing with span definitions for training, recommendation and
//! ranking passes, plus offline quality reports over a recommendation list.

pub mod quality;
pub mod tracing_setup;

pub use quality::{evaluate, LossPoint, QualityReport};
pub use tracing_setup::init_tracing;
