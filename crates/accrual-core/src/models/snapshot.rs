use serde::{Deserialize, Serialize};

/// Result of a projection or a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<K> {
    /// Counter value, clamped to the effective bounds.
    pub count: K,
    /// Timestamp the value is settled (or would be settled) at.
    pub timestamp: i64,
    /// Raw passive accrual before clamping. May exceed what was applied.
    pub auto_added: K,
}
