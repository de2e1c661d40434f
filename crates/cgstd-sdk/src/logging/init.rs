use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "cgstd_math=debug"). When it is `None`, `RUST_LOG` is consulted, and
/// `default_level` applies when neither is set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored, as is a logger installed by someone
/// else first.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        if builder(config, rust_log.as_deref()).try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

fn builder(config: LoggingConfig, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter.as_deref().or(rust_log) {
        builder.parse_filters(filter);
    } else {
        builder.filter_level(config.default_level);
    }

    builder.write_style(config.write_style);
    builder
}
