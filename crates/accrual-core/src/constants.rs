/// Accrual interval value that disables passive accrual.
/// Any interval at or below this leaves the counter purely manual.
pub const DISABLED_INTERVAL: i64 = 0;
