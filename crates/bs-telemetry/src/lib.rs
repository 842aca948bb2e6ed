//! # Ban-Sentry Telemetry
//!
//! Structured logging for hosts embedding the registry.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bs_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BS_SERVICE_NAME` | `ban-sentry` | Service name in log lines |
//! | `BS_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `BS_JSON_LOGS` | `false` | JSON output (defaults on inside containers) |
//! | `BS_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use std::sync::Once;
use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A global subscriber was already installed
    #[error("Global subscriber already set: {0}")]
    AlreadyInitialized(String),
}

static TEST_LOGGING: Once = Once::new();

/// Install quiet logging once per test binary. Later calls are no-ops.
pub fn init_test_logging() {
    TEST_LOGGING.call_once(|| {
        // Another harness may already own the global subscriber.
        let _ = init_logging(&TelemetryConfig::for_tests());
    });
}
