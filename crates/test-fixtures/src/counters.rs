use std::collections::HashMap;

use accrual_core::errors::{AccrualError, AccrualResult, StoreError};
use accrual_core::models::CounterState;
use accrual_core::numeric::Numeric;
use accrual_core::traits::IAccrualCounter;
use accrual_core::FixedParams;

/// Which contract call a [`MemoryCounter`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Read,
    Write,
    Params,
}

/// Counters keyed by a `String` context, held in memory.
///
/// Reading a key that was never inserted fails with
/// [`StoreError::NotFound`]. Failures can be injected per call kind.
#[derive(Debug, Clone)]
pub struct MemoryCounter<T, K> {
    params: FixedParams<T, K>,
    states: HashMap<String, CounterState<K>>,
    fail_on: Option<FailOn>,
    writes: usize,
}

impl<T: Numeric, K: Numeric> MemoryCounter<T, K> {
    pub fn new(params: FixedParams<T, K>) -> Self {
        Self {
            params,
            states: HashMap::new(),
            fail_on: None,
            writes: 0,
        }
    }

    pub fn insert(&mut self, key: &str, state: CounterState<K>) {
        self.states.insert(key.to_string(), state);
    }

    pub fn state(&self, key: &str) -> Option<CounterState<K>> {
        self.states.get(key).copied()
    }

    pub fn fail_on(&mut self, fail_on: Option<FailOn>) {
        self.fail_on = fail_on;
    }

    /// Number of successful writes across all keys.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check_params(&self, name: &'static str) -> AccrualResult<()> {
        if self.fail_on == Some(FailOn::Params) {
            return Err(AccrualError::Parameter {
                name,
                reason: "injected failure".into(),
            });
        }
        Ok(())
    }
}

impl<T: Numeric, K: Numeric> IAccrualCounter<String> for MemoryCounter<T, K> {
    type Rate = T;
    type Count = K;

    fn max(&self, _key: &String) -> AccrualResult<K> {
        self.check_params("max")?;
        Ok(self.params.max())
    }

    fn min(&self, _key: &String) -> AccrualResult<K> {
        self.check_params("min")?;
        Ok(self.params.min())
    }

    fn inc_interval(&self, _key: &String) -> AccrualResult<i64> {
        self.check_params("inc_interval")?;
        Ok(self.params.inc_interval())
    }

    fn inc_count(&self, _key: &String) -> AccrualResult<T> {
        self.check_params("inc_count")?;
        Ok(self.params.inc_count())
    }

    fn read(&self, key: &String) -> AccrualResult<CounterState<K>> {
        if self.fail_on == Some(FailOn::Read) {
            return Err(StoreError::Unavailable {
                reason: "injected read failure".into(),
            }
            .into());
        }
        self.states
            .get(key)
            .copied()
            .ok_or_else(|| StoreError::NotFound { key: key.clone() }.into())
    }

    fn write(&mut self, state: CounterState<K>, key: &mut String) -> AccrualResult<()> {
        if self.fail_on == Some(FailOn::Write) {
            return Err(StoreError::WriteRejected {
                reason: "injected write failure".into(),
            }
            .into());
        }
        self.states.insert(key.clone(), state);
        self.writes += 1;
        Ok(())
    }
}

/// Counter state carried inside the context value itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub state: CounterState<i64>,
    pub writes: usize,
}

impl Slot {
    pub fn new(count: i64, last_settled: i64) -> Self {
        Self {
            state: CounterState::new(count, last_settled),
            writes: 0,
        }
    }
}

/// Stateless contract whose storage lives in the [`Slot`] context.
///
/// [`SlotCounter::regen`] gives the stamina-style parameters: cap 100,
/// floor 0, half a unit per 1000 time units.
#[derive(Debug, Clone, Copy)]
pub struct SlotCounter {
    max: i64,
    min: i64,
    inc_interval: i64,
    inc_count: f64,
}

impl SlotCounter {
    pub fn new(params: FixedParams<f64, i64>) -> Self {
        Self {
            max: params.max(),
            min: params.min(),
            inc_interval: params.inc_interval(),
            inc_count: params.inc_count(),
        }
    }

    pub fn regen() -> Self {
        Self {
            max: 100,
            min: 0,
            inc_interval: 1_000,
            inc_count: 0.5,
        }
    }
}

impl IAccrualCounter<Slot> for SlotCounter {
    type Rate = f64;
    type Count = i64;

    fn max(&self, _slot: &Slot) -> AccrualResult<i64> {
        Ok(self.max)
    }

    fn min(&self, _slot: &Slot) -> AccrualResult<i64> {
        Ok(self.min)
    }

    fn inc_interval(&self, _slot: &Slot) -> AccrualResult<i64> {
        Ok(self.inc_interval)
    }

    fn inc_count(&self, _slot: &Slot) -> AccrualResult<f64> {
        Ok(self.inc_count)
    }

    fn read(&self, slot: &Slot) -> AccrualResult<CounterState<i64>> {
        Ok(slot.state)
    }

    fn write(&mut self, state: CounterState<i64>, slot: &mut Slot) -> AccrualResult<()> {
        slot.state = state;
        slot.writes += 1;
        Ok(())
    }
}
