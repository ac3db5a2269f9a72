use accrual_core::errors::AccrualResult;
use accrual_core::models::Snapshot;
use accrual_core::numeric::Numeric;
use accrual_core::traits::IAccrualCounter;
use tracing::debug;

use crate::adjustment;

/// Write pending passive accrual through to storage.
///
/// Equivalent to a zero, non-dry-run [`add`](crate::add) followed by a fresh
/// read, so the returned count and timestamp are what storage now holds.
pub fn settle<A, C>(counter: &mut A, now: i64, ctx: &mut C) -> AccrualResult<Snapshot<A::Count>>
where
    A: IAccrualCounter<C> + ?Sized,
    C: ?Sized,
{
    let _span = crate::settle_span!(now).entered();

    let adjusted = adjustment::add(counter, A::Count::ZERO, now, false, ctx)?;
    let state = counter.read(ctx)?;
    debug!(count = %state.count, timestamp = state.last_settled, "settled");

    Ok(Snapshot {
        count: state.count,
        timestamp: state.last_settled,
        auto_added: adjusted.auto_added,
    })
}
