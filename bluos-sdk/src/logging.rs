//! Logging setup for hosts embedding the assistant
//!
//! Hosts that install their own `tracing` subscriber can ignore this module
//! entirely; it exists so small deployments get sensible output with one
//! call.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Output profile for the tracing subscriber
#[derive(Debug, Clone, Copy)]
pub enum LoggingMode {
    /// No subscriber installed; all logs are dropped.
    Silent,
    /// Compact stderr output at info level.
    Development,
    /// Verbose output with source locations at debug level.
    Debug,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Install a global subscriber for the selected mode
///
/// Call once, early. `BLUOS_LOG_LEVEL` or `RUST_LOG` override the default
/// level filter for the chosen mode.
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => Registry::default()
            .with(fmt::layer().with_target(false).compact())
            .with(env_filter("info"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Debug => Registry::default()
            .with(fmt::layer().pretty().with_file(true).with_line_number(true))
            .with(env_filter("debug"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
    }
}

/// Pick the mode from `BLUOS_LOG_MODE`
///
/// Recognizes "development" and "debug"; anything else (including unset)
/// stays silent.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var("BLUOS_LOG_MODE").as_deref() {
        Ok("development") => LoggingMode::Development,
        Ok("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    };
    init_logging(mode)
}

/// Whether a global subscriber has already been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

fn env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("BLUOS_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(level) = std::env::var("RUST_LOG") {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(default_level)
    }
}
