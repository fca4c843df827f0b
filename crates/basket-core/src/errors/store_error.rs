/// History store errors for the external key-value persistence seam.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read history for user {user_id}: {reason}")]
    ReadFailed { user_id: String, reason: String },

    #[error("failed to write history for user {user_id}: {reason}")]
    WriteFailed { user_id: String, reason: String },

    #[error("stored history for user {user_id} is corrupt: {details}")]
    Corrupt { user_id: String, details: String },
}
