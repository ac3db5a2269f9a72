//! # accrual-core
//!
//! Foundation crate for time-gated bounded counters.
//! Defines the numeric kinds, the counter contract, models, errors, config,
//! and constants. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod numeric;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AccrualConfig, FixedParams};
pub use errors::{AccrualError, AccrualResult, StoreError};
pub use models::{Adjustment, CounterState, Snapshot};
pub use numeric::{Numeric, Wide};
pub use traits::IAccrualCounter;
