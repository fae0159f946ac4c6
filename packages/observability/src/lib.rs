//! # Observability
//!
//! Logging bootstrap shared by every catalog binary.
//!
//! Crates in the workspace are **log producers**: they only use `tracing`
//! macros and never decide where output goes. A binary calls
//! [`init`] or [`init_with_config`] once at startup.
//!
//! Output goes to two places:
//!
//! - a JSONL file (`~/.catalog/logs/catalog.jsonl` unless overridden), one
//!   object per event with timestamp, level, service, pid, target, message
//!   and structured fields
//! - optionally a compact human-readable stream on stderr
//!
//! ```rust,ignore
//! fn main() {
//!     observability::init_with_config(observability::LogConfig {
//!         service_name: "catalog-cli".into(),
//!         default_level: "debug".into(),
//!         also_stderr: true,
//!         ..Default::default()
//!     });
//!     tracing::info!("ready");
//! }
//! ```

mod file_sink;
mod json_layer;

use std::path::PathBuf;

pub use file_sink::{default_log_path, FileLogWriter};
pub use json_layer::{JsonLayer, LogEntry};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Name of the emitting binary, written into every JSONL line.
    pub service_name: String,

    /// Default level filter. `RUST_LOG` wins when set.
    pub default_level: String,

    /// Custom JSONL file path. `None` uses [`default_log_path`].
    pub log_path: Option<PathBuf>,

    /// Disable the JSONL file sink entirely.
    pub file_sink: bool,

    /// Also emit compact logs to stderr.
    pub also_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".into(),
            default_level: "info".into(),
            log_path: None,
            file_sink: true,
            also_stderr: false,
        }
    }
}

/// Initialize logging with default settings for `service_name`.
pub fn init(service_name: &str) {
    init_with_config(LogConfig {
        service_name: service_name.into(),
        ..Default::default()
    });
}

/// Initialize logging with custom configuration.
///
/// Calling this twice is harmless; the second subscriber is rejected and the
/// first one stays installed. If the log file cannot be opened the file sink
/// is skipped and a warning goes to the remaining sinks.
pub fn init_with_config(config: LogConfig) {
    file_sink::init_subscriber(&config);
}

/// Re-export tracing macros for convenience.
pub use tracing::{debug, error, info, instrument, trace, warn};

/// Re-export Level for advanced filtering.
pub use tracing::Level;
