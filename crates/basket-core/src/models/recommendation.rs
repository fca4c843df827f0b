use serde::{Deserialize, Serialize};

use super::Score;
use crate::catalog::Product;

/// A suggested product with its score and a human-readable rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product: Product,
    pub score: Score,
    pub rationale: String,
}

impl Recommendation {
    pub fn new(product: Product, score: Score, rationale: impl Into<String>) -> Self {
        Self {
            product,
            score,
            rationale: rationale.into(),
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.product.category_name()
    }
}
