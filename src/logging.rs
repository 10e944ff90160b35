//! Logging and tracing configuration

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Plain,
}

impl LogFormat {
    /// Unknown names fall back to plain text
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Plain,
        }
    }
}

/// Initialize tracing based on configuration.
///
/// `RUST_LOG` takes precedence over `logging.level`. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    match LogFormat::parse(&config.format) {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(false).json())
            .try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init()?,
        LogFormat::Plain => registry.with(fmt::layer()).try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" Pretty "), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Plain);
    }
}
