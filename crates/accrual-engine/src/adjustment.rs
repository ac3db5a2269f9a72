use accrual_core::errors::{AccrualError, AccrualResult};
use accrual_core::models::{Adjustment, CounterState};
use accrual_core::numeric::Numeric;
use accrual_core::traits::IAccrualCounter;
use tracing::debug;

use crate::projection;

/// Apply a manual `amount` on top of the passive accrual projected at `now`.
///
/// An adjustment that would leave the counter below `Min` is rejected: the
/// result has `accepted == false`, carries the projected value, and nothing is
/// written. Exceeding `Max` is allowed.
///
/// When the counter is at or above `Max` before or after the adjustment, the
/// stored timestamp becomes `now` rather than the last whole-interval
/// boundary, so no backlog of intervals builds up while capped.
///
/// A dry run returns what would have been committed and never writes.
pub fn add<A, C>(
    counter: &mut A,
    amount: A::Count,
    now: i64,
    dry_run: bool,
    ctx: &mut C,
) -> AccrualResult<Adjustment<A::Count>>
where
    A: IAccrualCounter<C> + ?Sized,
    C: ?Sized,
{
    let _span = crate::add_span!(amount, now, dry_run).entered();

    let min = counter.min(ctx)?;
    let projected = projection::get(counter, now, ctx)?;
    let after = projected
        .count
        .try_add(amount)
        .ok_or(AccrualError::NumericOverflow {
            operation: "manual adjustment",
        })?;

    if after < min {
        debug!(current = %projected.count, %after, %min, "adjustment rejected below minimum");
        return Ok(Adjustment {
            count: projected.count,
            accepted: false,
            auto_added: A::Count::ZERO,
        });
    }

    if dry_run {
        return Ok(Adjustment {
            count: after,
            accepted: true,
            auto_added: projected.auto_added,
        });
    }

    let max = counter.max(ctx)?;
    let timestamp = if after >= max || projected.count >= max {
        now
    } else {
        projected.timestamp
    };

    counter.write(CounterState::new(after, timestamp), ctx)?;
    debug!(before = %projected.count, %after, timestamp, "adjustment committed");

    Ok(Adjustment {
        count: after,
        accepted: true,
        auto_added: projected.auto_added,
    })
}
