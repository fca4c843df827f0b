//! # basket-features
//!
//! Turns a (product, history) pair into a fixed-length numeric vector.
//! The layout is frozen from the catalog at construction.

pub mod extractor;
pub mod profile;

pub use extractor::FeatureExtractor;
