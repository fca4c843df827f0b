/// Per-product validation failures raised during feature extraction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("product {id} has no category")]
    MissingCategory { id: u64 },

    #[error("product {id} has category {category:?} outside the catalog category set")]
    UnknownCategory { id: u64, category: String },

    #[error("product {id} has no tags")]
    MissingTags { id: u64 },

    #[error("product {id} has invalid price {price}")]
    InvalidPrice { id: u64, price: f64 },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
