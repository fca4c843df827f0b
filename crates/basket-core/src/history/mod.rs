//! Purchase history: an append-only, purchase-ordered record sequence.

mod purchase;

pub use purchase::PurchaseRecord;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;

/// Ordered purchases of one user. Insertion order is purchase order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserHistory {
    records: Vec<PurchaseRecord>,
}

impl UserHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one purchase.
    pub fn push(&mut self, record: PurchaseRecord) {
        self.records.push(record);
    }

    /// Append purchases in order.
    pub fn extend(&mut self, records: impl IntoIterator<Item = PurchaseRecord>) {
        self.records.extend(records);
    }

    /// Drop every record. Only used on logout or reset.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PurchaseRecord> {
        self.records.iter()
    }

    /// Ids of every purchased product.
    pub fn purchased_ids(&self) -> HashSet<ProductId> {
        self.records.iter().map(|r| r.product.id).collect()
    }

    /// The last `n` purchases, oldest first.
    pub fn recent(&self, n: usize) -> &[PurchaseRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }
}

impl FromIterator<PurchaseRecord> for UserHistory {
    fn from_iter<I: IntoIterator<Item = PurchaseRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
