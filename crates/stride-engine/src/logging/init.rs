use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one.
///
/// Schema changes, resizes and rejected loads are logged at debug level by the
/// engine, so they show up by default while dependencies stay at info.
pub const DEFAULT_FILTER: &str = "info,stride_engine=debug";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "warn",
/// "stride_engine=trace" to see every field load).
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Config with an explicit filter that overrides `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Filter string the logger will be built with: the explicit filter, then
    /// `env` (the value of `RUST_LOG`), then [`DEFAULT_FILTER`].
    pub fn resolve_filter(&self, env: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(env)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Libraries never call this; binaries do,
/// early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp_millis()
            .init();

        log::debug!("logging initialized with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_env() {
        let config = LoggingConfig::with_filter("warn");
        assert_eq!(config.resolve_filter(Some("trace".into())), "warn");
    }

    #[test]
    fn env_used_when_no_explicit_filter() {
        let config = LoggingConfig::default();
        let filter = config.resolve_filter(Some("stride_engine=trace".into()));
        assert_eq!(filter, "stride_engine=trace");
    }

    #[test]
    fn falls_back_to_project_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.resolve_filter(None), DEFAULT_FILTER);
        assert_eq!(config.resolve_filter(Some("  ".into())), DEFAULT_FILTER);
    }
}
