use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "tinct_engine=trace").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_write_style(mut self, style: env_logger::WriteStyle) -> Self {
        self.write_style = style;
        self
    }

    /// Builds the `env_logger` builder this config describes without installing it.
    ///
    /// Filter precedence: explicit `env_filter`, then `RUST_LOG`, then `info`.
    pub(crate) fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &self.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // Another logger may already be installed (e.g. by a test harness).
        if config.builder().try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
