use crate::errors::AccrualResult;
use crate::models::CounterState;
use crate::numeric::Numeric;

/// Parameters and storage for a time-gated bounded counter.
///
/// Every call receives the same opaque context `C`, so one implementation can
/// serve many counters told apart by the context. Parameters are queried at
/// call time and may differ between calls.
///
/// State may live in the implementation (keyed by context) or inside the
/// context value itself; `write` gets mutable access to both.
///
/// `read` must observe the most recent `write` for the same context. The
/// engine does no locking: callers serialize mutations of one counter.
pub trait IAccrualCounter<C: ?Sized> {
    /// Per-interval accrual amount. May be fractional or negative.
    type Rate: Numeric;
    /// Stored count and bounds.
    type Count: Numeric;

    /// Upper bound. Only caps passive accrual; manual additions may exceed it.
    fn max(&self, ctx: &C) -> AccrualResult<Self::Count>;

    /// Lower bound. Manual subtractions below it are rejected.
    fn min(&self, ctx: &C) -> AccrualResult<Self::Count>;

    /// Accrual interval in query time units. Non-positive disables accrual.
    fn inc_interval(&self, ctx: &C) -> AccrualResult<i64>;

    /// Amount accrued per whole elapsed interval.
    fn inc_count(&self, ctx: &C) -> AccrualResult<Self::Rate>;

    fn read(&self, ctx: &C) -> AccrualResult<CounterState<Self::Count>>;

    fn write(&mut self, state: CounterState<Self::Count>, ctx: &mut C) -> AccrualResult<()>;
}
