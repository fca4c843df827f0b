//! # basket-core
//!
//! Foundation crate for the Basket recommendation engine.
//! Defines the catalog and history types, models, traits, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod history;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Catalog, Product, ProductId};
pub use config::BasketConfig;
pub use errors::{BasketError, BasketResult};
pub use history::{PurchaseRecord, UserHistory};
pub use models::{Recommendation, Score, TrainingEvent};
