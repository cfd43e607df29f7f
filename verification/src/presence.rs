//! Face presence check.

use ventus_types::FaceDetection;

/// Whether the detector found at least one face.
///
/// No thresholding or geometry checks happen here; whatever the detector
/// chose to report counts. An empty slice is the valid "no faces" input.
pub fn has_face(faces: &[FaceDetection]) -> bool {
    !faces.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(confidence: f32) -> FaceDetection {
        FaceDetection::new(10.0, 20.0, 64.0, 64.0, confidence)
    }

    #[test]
    fn empty_means_no_face() {
        assert!(!has_face(&[]));
    }

    #[test]
    fn one_detection_is_enough() {
        assert!(has_face(&[face(0.93)]));
    }

    #[test]
    fn multiple_detections_still_one_answer() {
        assert!(has_face(&[face(0.93), face(0.51), face(0.88)]));
    }

    #[test]
    fn low_confidence_detections_still_count() {
        // The detector already applied its own threshold before reporting.
        assert!(has_face(&[face(0.01)]));
    }
}
