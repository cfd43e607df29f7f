//! The delivery seam.

use crate::error::NotifyError;
use crate::message::NotificationMessage;
use async_trait::async_trait;

/// Delivers composed notifications.
///
/// The caller only ever invokes `send`, exactly once per notification; retry
/// policy, queuing, and provider protocol all live behind this trait.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError>;

    /// Short implementation name for logs.
    fn name(&self) -> &str;
}
