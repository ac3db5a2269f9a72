use serde::{Deserialize, Serialize};

/// The settled `(count, timestamp)` pair a contract stores per counter.
///
/// `last_settled` is the time up to which accrual has been folded into
/// `count`, in the same unit as query timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterState<K> {
    pub count: K,
    pub last_settled: i64,
}

impl<K> CounterState<K> {
    pub fn new(count: K, last_settled: i64) -> Self {
        Self {
            count,
            last_settled,
        }
    }
}
