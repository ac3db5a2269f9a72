mod store_error;

pub use store_error::StoreError;

/// Top-level error for counter operations.
///
/// A manual adjustment that would fall below the minimum is not an error:
/// it comes back as a rejected [`Adjustment`](crate::models::Adjustment).
#[derive(Debug, thiserror::Error)]
pub enum AccrualError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("parameter `{name}` unavailable: {reason}")]
    Parameter { name: &'static str, reason: String },

    #[error("numeric overflow during {operation}")]
    NumericOverflow { operation: &'static str },

    #[error("timestamp overflow: now={now}, last settled={base}")]
    TimestampOverflow { base: i64, now: i64 },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type AccrualResult<T> = Result<T, AccrualError>;
