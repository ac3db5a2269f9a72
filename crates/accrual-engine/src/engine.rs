use accrual_core::errors::AccrualResult;
use accrual_core::models::{Adjustment, Snapshot};
use accrual_core::traits::IAccrualCounter;

use crate::{adjustment, projection, settlement};

/// Owns a counter contract and runs the accrual operations against it.
///
/// A thin wrapper over [`get`](crate::get), [`add`](crate::add) and
/// [`settle`](crate::settle) for callers that keep the contract alongside
/// the code that drives it.
#[derive(Debug, Clone, Default)]
pub struct AccrualEngine<A> {
    counter: A,
}

impl<A> AccrualEngine<A> {
    pub fn new(counter: A) -> Self {
        Self { counter }
    }

    pub fn counter(&self) -> &A {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut A {
        &mut self.counter
    }

    pub fn into_inner(self) -> A {
        self.counter
    }

    /// Project the value at `now` without writing.
    pub fn get<C>(
        &self,
        now: i64,
        ctx: &C,
    ) -> AccrualResult<Snapshot<<A as IAccrualCounter<C>>::Count>>
    where
        A: IAccrualCounter<C>,
        C: ?Sized,
    {
        projection::get(&self.counter, now, ctx)
    }

    /// Apply a manual delta; see [`add`](crate::add).
    pub fn add<C>(
        &mut self,
        amount: <A as IAccrualCounter<C>>::Count,
        now: i64,
        dry_run: bool,
        ctx: &mut C,
    ) -> AccrualResult<Adjustment<<A as IAccrualCounter<C>>::Count>>
    where
        A: IAccrualCounter<C>,
        C: ?Sized,
    {
        adjustment::add(&mut self.counter, amount, now, dry_run, ctx)
    }

    /// Commit pending accrual with no manual change.
    pub fn settle<C>(
        &mut self,
        now: i64,
        ctx: &mut C,
    ) -> AccrualResult<Snapshot<<A as IAccrualCounter<C>>::Count>>
    where
        A: IAccrualCounter<C>,
        C: ?Sized,
    {
        settlement::settle(&mut self.counter, now, ctx)
    }
}
