//! Provider seams.

use crate::error::ProviderError;
use async_trait::async_trait;
use ventus_types::{FaceDetection, LabelDetection, PhotoRef};

/// Produces per-label confidence scores for a photo.
///
/// Implementations own their detection thresholds and limits; callers treat
/// the returned sequence as the complete set of evidence. An empty vector is
/// a valid answer, not an error.
#[async_trait]
pub trait LabelProvider: Send + Sync {
    async fn detect_labels(&self, photo: &PhotoRef) -> Result<Vec<LabelDetection>, ProviderError>;

    /// Short implementation name for logs.
    fn name(&self) -> &str;
}

/// Locates faces in a photo.
#[async_trait]
pub trait FaceProvider: Send + Sync {
    async fn detect_faces(&self, photo: &PhotoRef) -> Result<Vec<FaceDetection>, ProviderError>;

    /// Short implementation name for logs.
    fn name(&self) -> &str;
}
