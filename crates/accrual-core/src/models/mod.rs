mod adjustment;
mod counter_state;
mod snapshot;

pub use adjustment::Adjustment;
pub use counter_state::CounterState;
pub use snapshot::Snapshot;
