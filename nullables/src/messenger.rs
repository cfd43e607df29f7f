//! Nullable messenger: records notifications without delivering them.

use async_trait::async_trait;
use std::sync::Mutex;
use ventus_notify::{Messenger, NotificationMessage, NotifyError};

/// A test messenger that records messages instead of delivering them.
/// Thread-safe for use with tokio's multi-threaded runtime.
pub struct NullMessenger {
    /// Every message handed to `send`, including ones that then "failed".
    sent_messages: Mutex<Vec<NotificationMessage>>,
    fail_with: Option<String>,
}

impl NullMessenger {
    /// A messenger that accepts and records everything.
    pub fn new() -> Self {
        Self {
            sent_messages: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// A messenger that records the attempt, then fails delivery.
    pub fn failing(message: &str) -> Self {
        Self {
            sent_messages: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    /// Get all recorded messages (for assertions).
    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent_messages.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }
}

impl Default for NullMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Messenger for NullMessenger {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.sent_messages.lock().unwrap().push(message.clone());
        match &self.fail_with {
            Some(reason) => Err(NotifyError::Delivery(reason.clone())),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "null-messenger"
    }
}
