//! Configuration loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document is valid and a
//! partial one only overrides what it names.

pub mod counter_config;
pub mod defaults;
pub mod fixed_params;
pub mod observability_config;

pub use counter_config::CounterConfig;
pub use fixed_params::FixedParams;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AccrualError, AccrualResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccrualConfig {
    pub counter: CounterConfig,
    pub observability: ObservabilityConfig,
}

impl AccrualConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(input: &str) -> AccrualResult<Self> {
        toml::from_str(input).map_err(|e| AccrualError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> AccrualResult<String> {
        toml::to_string(self).map_err(|e| AccrualError::Config(e.to_string()))
    }
}
