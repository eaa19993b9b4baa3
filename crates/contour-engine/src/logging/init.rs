use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one.
pub const DEFAULT_FILTER: &str = "info";

/// Logger configuration.
///
/// `env_filter` uses `env_logger` syntax, e.g. `"debug"` or
/// `"contour_ui=debug,contour_lang=warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with a timestamp. Off by default; output is short-lived.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// The filter that will be installed: explicit, then `env`, then
    /// [`DEFAULT_FILTER`]. Blank values count as unset.
    pub fn resolve_filter(&self, env: Option<&str>) -> String {
        [self.env_filter.as_deref(), env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_string()
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once; later calls are no-ops.
///
/// Records go to stderr so stdout stays free for command output.
/// Library crates only emit through the `log` facade and never call this.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(env.as_deref());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&filter)
            .write_style(config.write_style)
            .target(env_logger::Target::Stderr);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized with filter {:?}", filter),
            Err(e) => log::warn!("logger already installed elsewhere: {}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig::default().with_filter("contour_ui=debug");
        assert_eq!(cfg.resolve_filter(Some("warn")), "contour_ui=debug");
    }

    #[test]
    fn env_then_default() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.resolve_filter(Some("warn")), "warn");
        assert_eq!(cfg.resolve_filter(None), DEFAULT_FILTER);
    }

    #[test]
    fn blank_values_are_skipped() {
        let cfg = LoggingConfig::default().with_filter("  ");
        assert_eq!(cfg.resolve_filter(Some("")), DEFAULT_FILTER);
    }
}
