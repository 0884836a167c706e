//! Tracing subscriber setup for the command-line front end.

use crate::config::LoggingConfig;
use crate::error::NexusError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the log filter: `RUST_LOG` when set, otherwise `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter, NexusError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| NexusError::Config {
        msg: format!("invalid log level '{}': {}", level, e),
    })
}

/// Install the global subscriber, writing to stderr.
pub fn init_tracing(level: &str, json_logs: bool) -> Result<(), NexusError> {
    let filter = build_filter(level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json_logs {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    installed.map_err(|e| NexusError::Config {
        msg: format!("failed to initialize logging: {}", e),
    })?;

    tracing::debug!(level, json_logs, "tracing initialized");
    Ok(())
}

/// Install the subscriber described by a `[logging]` section.
pub fn init_from_config(config: &LoggingConfig) -> Result<(), NexusError> {
    init_tracing(&config.level, config.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(build_filter("ferro_nexus=debug,warn").is_ok());
            assert!(build_filter("ferro_nexus=[").is_err());
        }
    }
}
