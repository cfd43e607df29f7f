//! Decision core for Ventus photo verification.
//!
//! Three pure rules, combined by the policy:
//! 1. **Label classification**: does the photo show an outdoor scene?
//! 2. **Face presence**: did the detector find at least one face?
//! 3. **Verification policy**: combine both under the active configuration.
//!
//! Everything in this crate is deterministic and free of I/O. Fetching
//! detections and acting on verdicts belongs to the service crate.

pub mod classifier;
pub mod error;
pub mod policy;
pub mod presence;
pub mod verdict;

pub use classifier::{classify_outdoor, Classification, ClassificationPolicy};
pub use error::VerificationError;
pub use policy::{evaluate, REASON_NO_FACE, REASON_NOT_OUTDOOR};
pub use presence::has_face;
pub use verdict::VerificationVerdict;
