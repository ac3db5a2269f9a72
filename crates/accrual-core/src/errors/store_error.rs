/// Errors raised by contract implementations that back counter state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no counter state for key {key}")]
    NotFound { key: String },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("write rejected: {reason}")]
    WriteRejected { reason: String },
}
