//! Terminal implementations of the gateway's host hooks.

use crate::output::{notice_line, OutputFormat};
use catalog_gateway::{Navigator, Notice, Notifier};
use std::time::Duration;

/// Prints notices to stderr.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    format: OutputFormat,
}

impl TerminalNotifier {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(level = ?notice.level, message = %notice.message, "notice");
        eprintln!("{}", notice_line(&notice, self.format));
    }
}

/// There is no login page to navigate to; point at the login command.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNavigator {
    format: OutputFormat,
}

impl TerminalNavigator {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Navigator for TerminalNavigator {
    fn redirect_to_login(&self, delay: Duration) {
        tracing::debug!(delay_ms = delay.as_millis() as u64, "login redirect requested");
        if self.format == OutputFormat::Text {
            eprintln!("Run `catalog login` to sign in.");
        }
    }
}
