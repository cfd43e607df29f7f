use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("detection provider error: {0}")]
    Provider(#[from] ventus_providers::ProviderError),

    #[error("notification delivery error: {0}")]
    Notify(#[from] ventus_notify::NotifyError),

    #[error("verification policy error: {0}")]
    Verification(#[from] ventus_verification::VerificationError),

    #[error("config error: {0}")]
    Config(String),
}
