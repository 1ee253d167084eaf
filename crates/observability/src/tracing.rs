//! Tracing/logging initialization.
//!
//! Logs always go to stderr so command output on stdout stays machine
//! readable.

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable single-line output.
    Compact,
}

impl LogFormat {
    /// `CATALOG_LOG_FORMAT=compact` selects compact output; anything else is JSON.
    pub fn from_env() -> Self {
        Self::parse(std::env::var("CATALOG_LOG_FORMAT").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("compact") => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // Filter configurable via RUST_LOG.
    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_defaults_to_json() {
        assert_eq!(LogFormat::parse(None), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some(" Compact ")), LogFormat::Compact);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(LogFormat::Compact);
        init(LogFormat::Json);
        ::tracing::info!("still logging");
    }
}
