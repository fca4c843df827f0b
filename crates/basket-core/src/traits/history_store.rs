use crate::errors::StoreError;
use crate::history::UserHistory;

/// External key-value persistence for purchase histories, keyed by user id.
pub trait IHistoryStore: Send + Sync {
    /// Stored history, empty when the user has none.
    fn load(&self, user_id: &str) -> Result<UserHistory, StoreError>;

    /// Replace the stored history.
    fn save(&self, user_id: &str, history: &UserHistory) -> Result<(), StoreError>;

    fn clear(&self, user_id: &str) -> Result<(), StoreError>;
}
