//! Shared value types for the Ventus photo-verification service.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! label and face detections, the outdoor vocabulary, photo references, and the
//! verification request.

pub mod face;
pub mod label;
pub mod photo;
pub mod request;

pub use face::FaceDetection;
pub use label::{LabelDetection, OutdoorLabelSet, DEFAULT_OUTDOOR_LABELS};
pub use photo::PhotoRef;
pub use request::VerificationRequest;
