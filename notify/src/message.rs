//! The notification value type.

use serde::{Deserialize, Serialize};

/// One composed notification, ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Message text, already composed.
    pub body: String,
    /// Sender number the gateway should use.
    pub from: String,
    /// Recipient number (the accountability contact).
    pub to: String,
}

impl NotificationMessage {
    pub fn new(body: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}
