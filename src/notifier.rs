//! Transient user-facing notifications
//!
//! The session reports every state change and every surfaced error through a
//! [`Notifier`]. Notifying is fire-and-forget: it cannot fail and its outcome
//! never feeds back into session state.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Default => write!(f, "default"),
            Severity::Destructive => write!(f, "destructive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Sink for session notifications
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Notifier that logs each notification and buffers it for later display
///
/// The MCP layer drains the buffer after every action so each tool response
/// carries exactly the notifications that action produced.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications buffered since the last drain
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Take all buffered notifications
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Default => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
            Severity::Destructive => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
        }
        self.entries.push(notification);
    }
}
