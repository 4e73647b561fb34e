//! Logging infrastructure for absplit.
//!
//! Diagnostic output goes through the `tracing` ecosystem; the
//! user-facing console lines the CLI prints use the [`Marker`]
//! prefixes.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Trace-level debugging (very verbose).
    Trace,
    /// Debug information.
    Debug,
    /// General information.
    Info,
    /// Warnings.
    #[default]
    Warn,
    /// Errors.
    Error,
}

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`, falling back to the provided default level.
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

/// Console markers for user-facing result lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Something worked: `✓ message`
    Success,
    /// Something failed: `✗ message`
    Failure,
}

impl Marker {
    /// Format a message with this marker.
    pub fn format(&self, message: &str) -> String {
        match self {
            Marker::Success => format!("✓ {}", message),
            Marker::Failure => format!("✗ {}", message),
        }
    }
}
