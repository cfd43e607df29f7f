//! Accountability notifications.
//!
//! When a photo fails verification and the user has a designated contact, the
//! service sends that contact an SMS. This crate owns the text composition
//! rules, the message value type, the delivery seam ([`Messenger`]), and the
//! HTTP client for the SMS gateway.

pub mod compose;
pub mod error;
pub mod message;
pub mod messenger;
pub mod sms;

pub use compose::{compose_notification, FALLBACK_NAME, USERNAME_PLACEHOLDER};
pub use error::NotifyError;
pub use message::NotificationMessage;
pub use messenger::Messenger;
pub use sms::SmsClient;
