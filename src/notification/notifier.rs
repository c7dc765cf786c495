use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            message: message.into(),
            severity: Severity::Error,
            duration: ERROR_DISPLAY_DURATION,
        }
    }
}

// Fire-and-forget seam towards the UI layer. The transport never waits on
// delivery and never learns whether anyone is listening.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[derive(Clone, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: Notification) {}
}

// Hands notifications to whatever UI binding drains the receiver. A
// dropped receiver silently discards them, matching fire-and-forget.
#[derive(Clone)]
pub struct ChannelNotifier {
    sender: UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (ChannelNotifier { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        let _ = self.sender.send(notification);
    }
}
