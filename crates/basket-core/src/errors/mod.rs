//! Error handling for Basket.
//! One error enum per subsystem, `thiserror` only, aggregated into [`BasketError`].

pub mod basket_error;
pub mod config_error;
pub mod store_error;
pub mod training_error;
pub mod validation_error;

pub use basket_error::{BasketError, BasketResult};
pub use config_error::ConfigError;
pub use store_error::StoreError;
pub use training_error::TrainingError;
pub use validation_error::{ValidationError, ValidationResult};
