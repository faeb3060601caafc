//! Eureka Registrar Logging
//!
//! Installs a `tracing` subscriber configured from `EUREKA_*` environment
//! variables. Library crates only emit `tracing` events; the binary calls
//! [`init`] once at startup.
//!
//! # Usage
//!
//! ```rust,no_run
//! eureka_log::init();
//! tracing::info!(instances = 3, "Registering instances");
//! ```
//!
//! # Environment Variables
//!
//! - `EUREKA_DEBUG=1` - Enable debug logging
//! - `EUREKA_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `EUREKA_LOG_FORMAT=pretty|json|compact` - Set output format
//! - `EUREKA_LOG_COLOR=1|0` - Enable/disable colors
//! - `RUST_LOG` - Full filter directive, overrides the level when set

use once_cell::sync::OnceCell;
use std::env;
use tracing_subscriber::filter::LevelFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line, human readable
    Pretty,
    /// One line per event
    Compact,
    /// One JSON object per event
    Json,
}

impl Format {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Used when `RUST_LOG` is unset
    pub level: LevelFilter,
    pub format: Format,
    /// Ignored for [`Format::Json`]
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            format: Format::Json,
            color: false,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).map(|v| v == "1" || v.eq_ignore_ascii_case("true"));

        let fallback = if flag("EUREKA_DEBUG").unwrap_or(false) {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        let level = lookup("EUREKA_LOG_LEVEL")
            .and_then(|s| s.parse::<LevelFilter>().ok())
            .unwrap_or(fallback);

        let format = lookup("EUREKA_LOG_FORMAT")
            .and_then(|s| Format::parse(&s))
            .unwrap_or(Format::Json);

        let color = flag("EUREKA_LOG_COLOR")
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        Self {
            level,
            format,
            color,
        }
    }
}

static INSTALLED: OnceCell<LogConfig> = OnceCell::new();

/// Initialize logging from the environment.
///
/// Only the first call installs a subscriber; later calls return the
/// configuration that is already active.
pub fn init() -> &'static LogConfig {
    init_with(LogConfig::from_env())
}

/// Initialize logging with explicit settings.
pub fn init_with(config: LogConfig) -> &'static LogConfig {
    INSTALLED.get_or_init(|| {
        install(&config);
        config
    })
}

fn install(config: &LogConfig) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let registry = tracing_subscriber::registry().with(filter);

    // A subscriber may already be set (e.g. by a test harness); keep it.
    let _ = match config.format {
        Format::Json => registry.with(fmt::layer().json()).try_init(),
        Format::Pretty => registry
            .with(fmt::layer().pretty().with_ansi(config.color))
            .try_init(),
        Format::Compact => registry
            .with(fmt::layer().compact().with_ansi(config.color))
            .try_init(),
    };
}
