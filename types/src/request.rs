//! The verification request.

use crate::photo::PhotoRef;
use serde::{Deserialize, Serialize};

/// One photo-verification request, built once per call and never mutated.
///
/// `contact_phone` controls whether a failed verification escalates to an SMS;
/// `user_name` and `message_template` only shape the message text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// The submitted photo.
    pub photo: PhotoRef,
    /// E.164 number of the accountability contact, if the user configured one.
    pub contact_phone: Option<String>,
    /// Display name substituted into the notification text.
    pub user_name: Option<String>,
    /// Caller-supplied message template, overriding the configured one.
    pub message_template: Option<String>,
}

impl VerificationRequest {
    pub fn new(photo: PhotoRef) -> Self {
        Self {
            photo,
            contact_phone: None,
            user_name: None,
            message_template: None,
        }
    }

    pub fn with_contact_phone(mut self, phone: impl Into<String>) -> Self {
        self.contact_phone = Some(phone.into());
        self
    }

    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    pub fn with_message_template(mut self, template: impl Into<String>) -> Self {
        self.message_template = Some(template.into());
        self
    }
}
