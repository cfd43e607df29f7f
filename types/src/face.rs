//! Face detections.

use serde::{Deserialize, Serialize};

/// A face the detector located in a photo, with its bounding box.
///
/// The decision rules only ever consult the *presence* of detections; the
/// geometry is carried through for logging and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    /// Left edge of the bounding box, in pixels.
    pub x: f32,
    /// Top edge of the bounding box, in pixels.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Detector confidence on a 0-1 scale.
    pub confidence: f32,
}

impl FaceDetection {
    pub fn new(x: f32, y: f32, width: f32, height: f32, confidence: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            confidence,
        }
    }
}
