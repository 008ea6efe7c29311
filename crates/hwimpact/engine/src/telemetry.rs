//! Tracing setup for binaries and services embedding the engine.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{EngineError, EngineResult};

/// Build the filter: `RUST_LOG` when set, else the configured level.
pub fn env_filter(config: &LoggingConfig) -> EngineResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| EngineError::Telemetry(format!("invalid level {}: {e}", config.level))),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LoggingConfig) -> EngineResult<()> {
    let subscriber = tracing_subscriber::registry().with(env_filter(config)?);

    let installed = if config.json {
        subscriber
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        subscriber
            .with(fmt::layer().with_target(true))
            .try_init()
    };
    installed.map_err(|e| EngineError::Telemetry(e.to_string()))
}
