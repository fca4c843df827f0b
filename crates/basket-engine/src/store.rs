//! In-memory [`IHistoryStore`] keeping JSON-encoded histories.

use dashmap::DashMap;

use basket_core::errors::StoreError;
use basket_core::traits::IHistoryStore;
use basket_core::UserHistory;

/// Concurrent key-value store of serialized purchase histories.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    entries: DashMap<String, String>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoded history for `user_id`, as it would be written to disk.
    pub fn raw(&self, user_id: &str) -> Option<String> {
        self.entries.get(user_id).map(|e| e.value().clone())
    }

    /// Store an already-encoded value without checking it.
    pub fn insert_raw(&self, user_id: impl Into<String>, encoded: impl Into<String>) {
        self.entries.insert(user_id.into(), encoded.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IHistoryStore for InMemoryHistoryStore {
    fn load(&self, user_id: &str) -> Result<UserHistory, StoreError> {
        let Some(encoded) = self.raw(user_id) else {
            return Ok(UserHistory::new());
        };
        serde_json::from_str(&encoded).map_err(|e| StoreError::Corrupt {
            user_id: user_id.to_string(),
            details: e.to_string(),
        })
    }

    fn save(&self, user_id: &str, history: &UserHistory) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(history).map_err(|e| StoreError::WriteFailed {
            user_id: user_id.to_string(),
            reason: e.to_string(),
        })?;
        self.entries.insert(user_id.to_string(), encoded);
        Ok(())
    }

    fn clear(&self, user_id: &str) -> Result<(), StoreError> {
        self.entries.remove(user_id);
        Ok(())
    }
}
