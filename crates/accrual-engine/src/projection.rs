use accrual_core::constants::DISABLED_INTERVAL;
use accrual_core::errors::{AccrualError, AccrualResult};
use accrual_core::models::{CounterState, Snapshot};
use accrual_core::numeric::{self, Numeric};
use accrual_core::traits::IAccrualCounter;
use tracing::{debug, trace};

/// Project the counter's value at `now` without writing anything.
///
/// Only whole intervals are credited: the returned timestamp advances by
/// `rounds * inc_interval`, leaving any partial interval for the next call.
/// Passive accrual is capped at `max(Max, stored count)`, so a stored
/// overshoot is never reduced by the cap, then floored at `Min`.
///
/// `auto_added` is the raw accrual before clamping and can be larger than
/// the change actually applied. It saturates at the bounds of the rate and
/// count kinds, so a counter left idle for a very long time still projects
/// to its ceiling (or floor) instead of failing. Only a NaN accrual is
/// reported as [`AccrualError::NumericOverflow`].
pub fn get<A, C>(counter: &A, now: i64, ctx: &C) -> AccrualResult<Snapshot<A::Count>>
where
    A: IAccrualCounter<C> + ?Sized,
    C: ?Sized,
{
    let _span = crate::get_span!(now).entered();

    let CounterState {
        count: base_count,
        last_settled: base_ts,
    } = counter.read(ctx)?;
    let unchanged = Snapshot {
        count: base_count,
        timestamp: base_ts,
        auto_added: A::Count::ZERO,
    };

    let inc_interval = counter.inc_interval(ctx)?;
    if inc_interval <= DISABLED_INTERVAL {
        trace!(inc_interval, "accrual disabled");
        return Ok(unchanged);
    }

    let elapsed = now
        .checked_sub(base_ts)
        .ok_or(AccrualError::TimestampOverflow { base: base_ts, now })?;
    let rounds = elapsed / inc_interval;
    if rounds <= 0 {
        return Ok(unchanged);
    }

    let inc_count = counter.inc_count(ctx)?;
    let raw = A::Rate::rounds_saturating(rounds)
        .mul_saturating(inc_count)
        .ok_or(AccrualError::NumericOverflow {
            operation: "accrual rate",
        })?;
    let auto_added: A::Count = numeric::convert_saturating(raw, "accrual to count")?;
    // rounds * inc_interval <= elapsed, so this stays within [base_ts, now].
    let timestamp = base_ts + rounds * inc_interval;

    let mut count = base_count
        .add_saturating(auto_added)
        .ok_or(AccrualError::NumericOverflow {
            operation: "passive accrual",
        })?;

    let max = counter.max(ctx)?;
    let ceiling = if base_count > max { base_count } else { max };
    if count > ceiling {
        trace!(%count, %ceiling, "clamped to ceiling");
        count = ceiling;
    }
    let min = counter.min(ctx)?;
    if count < min {
        trace!(%count, %min, "clamped to floor");
        count = min;
    }

    debug!(%base_count, %count, rounds, %auto_added, timestamp, "projected");
    Ok(Snapshot {
        count,
        timestamp,
        auto_added,
    })
}
