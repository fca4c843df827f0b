use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A completed purchase. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub product: Product,
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseRecord {
    pub fn new(product: Product, purchased_at: DateTime<Utc>) -> Self {
        Self {
            product,
            purchased_at,
        }
    }

    /// Record a purchase happening now.
    pub fn now(product: Product) -> Self {
        Self::new(product, Utc::now())
    }
}
