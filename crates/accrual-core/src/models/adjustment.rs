use serde::{Deserialize, Serialize};

/// Result of a manual adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment<K> {
    /// Value after the adjustment, or the projected value when rejected.
    pub count: K,
    /// `false` when the adjustment would have dropped below the minimum.
    pub accepted: bool,
    /// Raw passive accrual before clamping; zero when rejected.
    pub auto_added: K,
}

impl<K> Adjustment<K> {
    pub fn is_rejected(&self) -> bool {
        !self.accepted
    }
}
