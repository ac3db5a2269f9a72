// Counter defaults
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_INC_INTERVAL: i64 = 1_000;
pub const DEFAULT_INC_COUNT: f64 = 1.0;

// Observability defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
