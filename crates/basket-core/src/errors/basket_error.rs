use super::{ConfigError, StoreError, TrainingError, ValidationError};

/// Top-level error for every public Basket operation.
#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("training error: {0}")]
    Training(#[from] TrainingError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("history store error: {0}")]
    Store(#[from] StoreError),

    #[error("no active session for user {user_id}")]
    SessionNotFound { user_id: String },

    #[error("session for user {user_id} was poisoned by a panicked pass")]
    SessionPoisoned { user_id: String },

    #[error("duplicate product id {id} in catalog")]
    DuplicateProduct { id: u64 },

    #[error("product {id} is not in the catalog")]
    UnknownProduct { id: u64 },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BasketError {
    fn from(err: serde_json::Error) -> Self {
        BasketError::Serialization(err.to_string())
    }
}

/// Convenience alias used across the workspace.
pub type BasketResult<T> = Result<T, BasketError>;
