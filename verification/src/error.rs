use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("confidence threshold {0} is outside the 0-100 scale")]
    InvalidThreshold(f64),

    #[error("min_matches must be at least 1")]
    InvalidMinMatches,
}
