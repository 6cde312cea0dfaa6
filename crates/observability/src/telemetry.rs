//! Subscriber installation.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

/// Install the global subscriber. Safe to call once per process; a second
/// call reports `InitFailed`.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let default_level = config.log_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service = %config.service_name, "tracing initialized");
    Ok(())
}

/// Initialize from environment variables with the given service default.
pub fn init_from_env(default_service: &str) -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env(default_service))
}
