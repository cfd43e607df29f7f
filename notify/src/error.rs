use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("SMS gateway unreachable: {0}")]
    Unreachable(String),

    #[error("SMS delivery failed: {0}")]
    Delivery(String),
}
