use crate::errors::{AccrualError, AccrualResult};
use crate::numeric::{self, Numeric};

use super::CounterConfig;

/// A validated, typed set of constant counter parameters.
///
/// Contract implementations with fixed parameters can hold one of these and
/// delegate `max`, `min`, `inc_interval` and `inc_count` to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedParams<T, K> {
    max: K,
    min: K,
    inc_interval: i64,
    inc_count: T,
}

impl<T: Numeric, K: Numeric> FixedParams<T, K> {
    /// Fails when `min > max`.
    pub fn new(max: K, min: K, inc_interval: i64, inc_count: T) -> AccrualResult<Self> {
        if min > max {
            return Err(AccrualError::Config(format!(
                "min {min} is greater than max {max}"
            )));
        }
        Ok(Self {
            max,
            min,
            inc_interval,
            inc_count,
        })
    }

    /// Build from config, converting each value to its kind.
    ///
    /// Float values truncate toward zero for integral kinds, so an `i64` rate
    /// configured as `0.5` becomes `0`.
    pub fn from_config(config: &CounterConfig) -> AccrualResult<Self> {
        let max = numeric::convert::<f64, K>(config.max, "config max")?;
        let min = numeric::convert::<f64, K>(config.min, "config min")?;
        let inc_count = numeric::convert::<f64, T>(config.inc_count, "config inc_count")?;
        Self::new(max, min, config.inc_interval, inc_count)
    }

    pub fn max(&self) -> K {
        self.max
    }

    pub fn min(&self) -> K {
        self.min
    }

    pub fn inc_interval(&self) -> i64 {
        self.inc_interval
    }

    pub fn inc_count(&self) -> T {
        self.inc_count
    }

    pub fn accrual_enabled(&self) -> bool {
        self.inc_interval > crate::constants::DISABLED_INTERVAL
    }
}
