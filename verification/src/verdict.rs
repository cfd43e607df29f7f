//! Terminal verification verdicts.

use serde::{Deserialize, Serialize};

/// The terminal outcome of evaluating one photo.
///
/// A verdict is data, not an error: a photo that fails verification is a
/// legitimate, expected result and flows back to the caller as `Ok`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    /// Whether the photo satisfied the active policy.
    pub passed: bool,
    /// The outdoor classification that fed the decision.
    pub is_outdoor: bool,
    /// The face-presence result that fed the decision.
    pub has_face: bool,
    /// Failure reasons in a fixed order. Empty exactly when `passed`.
    pub reasons: Vec<String>,
}

impl VerificationVerdict {
    /// Joins the reasons into one line for boundary messages.
    pub fn summary(&self) -> String {
        self.reasons.join("; ")
    }
}
