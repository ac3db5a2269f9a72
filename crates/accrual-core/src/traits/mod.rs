mod counter;

pub use counter::IAccrualCounter;
