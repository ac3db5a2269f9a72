use serde::{Deserialize, Serialize};

use super::defaults;

/// Constant counter parameters.
///
/// Values are untyped here; [`FixedParams`](super::FixedParams) converts them
/// to the counter's rate and count kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Cap for passive accrual.
    pub max: f64,
    /// Floor for manual subtractions.
    pub min: f64,
    /// Accrual interval in query time units. Non-positive disables accrual.
    pub inc_interval: i64,
    /// Amount accrued per whole interval.
    pub inc_count: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            max: defaults::DEFAULT_MAX,
            min: defaults::DEFAULT_MIN,
            inc_interval: defaults::DEFAULT_INC_INTERVAL,
            inc_count: defaults::DEFAULT_INC_COUNT,
        }
    }
}
