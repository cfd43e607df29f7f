use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request to detection provider failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from detection provider: {0}")]
    InvalidResponse(String),

    #[error("detection provider unreachable: {0}")]
    Unreachable(String),
}
