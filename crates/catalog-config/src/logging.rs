//! Logging initialization for catalog binaries.
//!
//! Thin wrapper over the observability crate so binaries only pass a
//! service name, a level and the resolved paths.

use crate::Paths;
use observability::LogConfig;

/// Initialize structured logging.
///
/// JSONL goes to `paths.log_file()`; `also_stderr` mirrors events to
/// stderr in compact form. `RUST_LOG` overrides `level`.
pub fn init_logging(service_name: &str, level: &str, paths: &Paths, also_stderr: bool) {
    observability::init_with_config(LogConfig {
        service_name: service_name.into(),
        default_level: level.into(),
        log_path: Some(paths.log_file()),
        also_stderr,
        ..Default::default()
    });
}
