//! Client-facing response shape.

use serde::{Deserialize, Serialize};

use ventus_verification::VerificationVerdict;

/// Message returned to the caller when verification passes.
pub const SUCCESS_MESSAGE: &str = "Outdoor photo verified successfully!";

/// What callers see: a success flag, a human-readable message, and the
/// outdoor sub-result so clients can distinguish "indoors" from "no face".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse {
    pub success: bool,
    pub message: String,
    pub is_outdoor: bool,
}

impl From<&VerificationVerdict> for VerificationResponse {
    fn from(verdict: &VerificationVerdict) -> Self {
        let message = if verdict.passed {
            SUCCESS_MESSAGE.to_string()
        } else {
            verdict.summary()
        };
        Self {
            success: verdict.passed,
            message,
            is_outdoor: verdict.is_outdoor,
        }
    }
}
