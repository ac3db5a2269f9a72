//! # accrual-engine
//!
//! Computes the value of a time-gated bounded counter at a caller-supplied
//! time and optionally commits it back through an
//! [`IAccrualCounter`](accrual_core::IAccrualCounter) implementation.
//!
//! - [`get`]: read-only projection of passive accrual.
//! - [`add`]: manual delta on top of accrual, optionally a dry run.
//! - [`settle`]: write pending accrual through with no manual change.
//!
//! The engine is synchronous and holds no locks. Callers serialize
//! concurrent mutations of the same counter.

pub mod adjustment;
pub mod engine;
pub mod projection;
pub mod settlement;
pub mod spans;

pub use adjustment::add;
pub use engine::AccrualEngine;
pub use projection::get;
pub use settlement::settle;
