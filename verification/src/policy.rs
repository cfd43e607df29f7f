//! The verification policy: combining the two checks into a verdict.

use crate::verdict::VerificationVerdict;

/// Reason attached when the photo is not outdoors.
pub const REASON_NOT_OUTDOOR: &str = "photo does not appear to be outdoors";

/// Reason attached when a required face is missing.
pub const REASON_NO_FACE: &str = "no face detected";

/// Evaluates the policy over the two check results.
///
/// `passed = is_outdoor && (has_face || !require_face)`. `require_face` is
/// plain configuration, orthogonal to how the outdoor call was made. On
/// failure the reasons come in a fixed order: the outdoor reason first, then
/// the face reason.
pub fn evaluate(is_outdoor: bool, has_face: bool, require_face: bool) -> VerificationVerdict {
    let passed = is_outdoor && (has_face || !require_face);

    let mut reasons = Vec::new();
    if !is_outdoor {
        reasons.push(REASON_NOT_OUTDOOR.to_string());
    }
    if require_face && !has_face {
        reasons.push(REASON_NO_FACE.to_string());
    }

    VerificationVerdict {
        passed,
        is_outdoor,
        has_face,
        reasons,
    }
}
