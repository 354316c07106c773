//! Logging initialisation

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSection};
use crate::{Error, Result};

const FALLBACK_LEVEL: &str = "info";

/// Install the global subscriber. `RUST_LOG` takes precedence over `logging.level`.
///
/// An unparseable `logging.level` falls back to `info` and is reported as a
/// warning once the subscriber is live.
pub fn init_tracing(logging: &LoggingSection) -> Result<()> {
    let (env_filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => configured_filter(&logging.level),
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };
    installed
        .map_err(|e| Error::internal(format!("failed to install tracing subscriber: {}", e)))?;

    if let Some(error) = rejected {
        tracing::warn!(
            level = %logging.level,
            %error,
            fallback = FALLBACK_LEVEL,
            "Invalid logging.level; using fallback"
        );
    }

    Ok(())
}

/// Parse `level` as a filter directive, returning the parse error when it had
/// to fall back.
fn configured_filter(level: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_valid_level_is_used() {
        let (filter, rejected) = configured_filter("gesture_processor=debug,tower_http=info");
        assert!(rejected.is_none());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        let (filter, rejected) = configured_filter("gesture_processor=loudest");
        assert!(rejected.is_some());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
