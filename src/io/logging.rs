//! Logger initialisation for the command-line tool
//!
//! The library only emits through the `log` facade; the binary installs
//! `env_logger` once at startup.

use std::sync::Once;

/// Logger configuration
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "shadecut=debug"). When absent, `RUST_LOG` is used, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter overriding the environment
    pub env_filter: Option<String>,
    /// Level used when neither an explicit filter nor `RUST_LOG` is set
    pub default_level: log::LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
        }
    }
}

impl LoggingConfig {
    /// Configuration that only reports warnings and errors
    pub const fn quiet() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Warn,
        }
    }
}

static INIT: Once = Once::new();

/// Install the global logger once; later calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        // A logger may already be installed by an embedding program or test harness
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
