//! User-facing notices and the login redirect.

use std::time::Duration;

/// Shown when a protected call is attempted without a credential.
pub const NOT_AUTHENTICATED: &str = "Not logged in, please log in first";
/// Shown once when the retry after a 401 fails again.
pub const SESSION_EXPIRED: &str = "Session expired, please log in again";
/// Used when a failed response carries no `message`.
pub const REQUEST_FAILED: &str = "Request failed";
pub const NETWORK_ERROR: &str = "Network error, please try again later";
pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Receives notices meant for the person at the keyboard.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Host hook for sending the user back to the login entry point.
pub trait Navigator: Send + Sync {
    /// `delay` is how long the host should keep the current notice visible
    /// before navigating.
    fn redirect_to_login(&self, delay: Duration);
}

/// Notifier that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => {
                tracing::info!(message = %notice.message, "notice")
            }
            NoticeLevel::Warning => tracing::warn!(message = %notice.message, "notice"),
            NoticeLevel::Error => tracing::error!(message = %notice.message, "notice"),
        }
    }
}

/// Navigator for hosts without a login page; logs the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect_to_login(&self, delay: Duration) {
        tracing::info!(delay_ms = delay.as_millis() as u64, "login required");
    }
}
