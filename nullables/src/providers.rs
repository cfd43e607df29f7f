//! Nullable detection providers: programmed answers, no network.

use async_trait::async_trait;
use std::sync::Mutex;
use ventus_providers::{FaceProvider, LabelProvider, ProviderError};
use ventus_types::{FaceDetection, LabelDetection, PhotoRef};

/// A label provider that answers every request with a programmed result.
/// Thread-safe for use with tokio's multi-threaded runtime.
pub struct NullLabelProvider {
    response: Result<Vec<LabelDetection>, String>,
    calls: Mutex<Vec<PhotoRef>>,
}

impl NullLabelProvider {
    /// Answers every request with the given labels.
    pub fn returning(labels: Vec<LabelDetection>) -> Self {
        Self {
            response: Ok(labels),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request as unreachable.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every photo this provider was asked about, in call order.
    pub fn calls(&self) -> Vec<PhotoRef> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LabelProvider for NullLabelProvider {
    async fn detect_labels(&self, photo: &PhotoRef) -> Result<Vec<LabelDetection>, ProviderError> {
        self.calls.lock().unwrap().push(photo.clone());
        match &self.response {
            Ok(labels) => Ok(labels.clone()),
            Err(message) => Err(ProviderError::Unreachable(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "null-labels"
    }
}

/// A face provider that answers every request with a programmed result.
/// Thread-safe for use with tokio's multi-threaded runtime.
pub struct NullFaceProvider {
    response: Result<Vec<FaceDetection>, String>,
    calls: Mutex<Vec<PhotoRef>>,
}

impl NullFaceProvider {
    /// Answers every request with the given faces.
    pub fn returning(faces: Vec<FaceDetection>) -> Self {
        Self {
            response: Ok(faces),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request as unreachable.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every photo this provider was asked about, in call order.
    pub fn calls(&self) -> Vec<PhotoRef> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FaceProvider for NullFaceProvider {
    async fn detect_faces(&self, photo: &PhotoRef) -> Result<Vec<FaceDetection>, ProviderError> {
        self.calls.lock().unwrap().push(photo.clone());
        match &self.response {
            Ok(faces) => Ok(faces.clone()),
            Err(message) => Err(ProviderError::Unreachable(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "null-faces"
    }
}
