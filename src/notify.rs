//! # User Notification Channel
//!
//! Every user-facing status message (success confirmations, permission
//! denials, retry prompts) goes through the [`Notifier`] trait instead of a
//! direct UI call. The API client holds a shared notifier handle, so the
//! request and negotiation logic can run unchanged against a console sink in
//! the CLI or a recording sink in tests.

use std::sync::Mutex;

/// Sink for user-visible status messages.
///
/// Implementations should deliver the message as-is; the exact wording is
/// part of the observable contract of the layer and is asserted in tests.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that prints messages to stdout, used by the CLI driver.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("[thông báo] {message}");
    }
}

/// Notifier that records every message, for asserting notification order
/// and counts in tests.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages delivered so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier lock poisoned")
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_preserves_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }
}
