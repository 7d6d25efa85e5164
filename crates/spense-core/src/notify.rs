//! Notification collaborator interface.

use tracing::{error, info};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// Fire-and-forget surface for user-facing messages.
///
/// Implementations decide how messages reach the user (toast, console
/// line, log); the core never reads anything back.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);
}

/// Notifier that routes messages through the tracing subscriber.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => error!("{message}"),
            Severity::Success | Severity::Info => info!("{message}"),
        }
    }
}
