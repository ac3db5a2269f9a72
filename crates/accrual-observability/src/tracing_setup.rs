//! Global subscriber installation for binaries and test harnesses.

use accrual_core::config::ObservabilityConfig;
use accrual_core::errors::AccrualResult;
use accrual_core::AccrualConfig;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Returns `false` when a
/// global subscriber was already installed.
pub fn init(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}

/// Install the subscriber described by the `[observability]` table of an
/// [`AccrualConfig`] TOML document.
pub fn init_from_toml(toml: &str) -> AccrualResult<bool> {
    let config = AccrualConfig::from_toml(toml)?;
    let installed = init(&config.observability);
    tracing::debug!(
        level = %config.observability.log_level,
        json = config.observability.json,
        installed,
        "tracing configured"
    );
    Ok(installed)
}
