//! Span definitions per operation: get, add, settle.

/// Create a projection span.
#[macro_export]
macro_rules! get_span {
    ($now:expr) => {
        tracing::debug_span!("accrual.get", now = $now)
    };
}

/// Create an adjustment span.
#[macro_export]
macro_rules! add_span {
    ($amount:expr, $now:expr, $dry_run:expr) => {
        tracing::debug_span!("accrual.add", amount = %$amount, now = $now, dry_run = $dry_run)
    };
}

/// Create a settlement span.
#[macro_export]
macro_rules! settle_span {
    ($now:expr) => {
        tracing::debug_span!("accrual.settle", now = $now)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const GET: &str = "accrual.get";
    pub const ADD: &str = "accrual.add";
    pub const SETTLE: &str = "accrual.settle";
}
