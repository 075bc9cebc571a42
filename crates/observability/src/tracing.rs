//! Tracing/logging initialization.
//!
//! Diagnostics always go to stderr so they never interleave with the prompts
//! and listings written to stdout.

use tracing_subscriber::EnvFilter;

/// Shape of the emitted log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// What to log and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Default filter directive (e.g. `warn`, `storefront_catalog=debug`).
    pub directive: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            directive: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LogSettings {
    /// Filter to install: `RUST_LOG` when set and valid, else `directive`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.directive))
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(settings: &LogSettings) {
    let filter = settings.env_filter();

    let _ = match settings.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };
}
