//! # accrual-observability
//!
//! Subscriber installation for binaries and test harnesses. The engine only
//! emits `tracing` events and spans; this crate decides where they go.

pub mod tracing_setup;

pub use tracing_setup::{init, init_from_toml};
