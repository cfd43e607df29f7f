//! Async verification flow: fetch detections, decide, notify on failure.

use std::sync::Arc;
use std::time::Instant;

use ventus_notify::Messenger;
use ventus_providers::{FaceProvider, LabelProvider};
use ventus_types::VerificationRequest;

use crate::metrics::ServiceMetrics;
use crate::orchestrator::{PhotoVerifier, VerificationOutcome};
use crate::ServiceError;

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Drives one verification end to end.
///
/// Detection fetches are infrastructure and may fail with [`ServiceError`];
/// a photo that merely fails the policy is a successful call whose outcome
/// carries `passed == false`.
pub struct VerificationService {
    verifier: PhotoVerifier,
    labels: Arc<dyn LabelProvider>,
    faces: Arc<dyn FaceProvider>,
    messenger: Arc<dyn Messenger>,
    metrics: Arc<ServiceMetrics>,
}

impl VerificationService {
    pub fn new(
        verifier: PhotoVerifier,
        labels: Arc<dyn LabelProvider>,
        faces: Arc<dyn FaceProvider>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            verifier,
            labels,
            faces,
            messenger,
            metrics: Arc::new(ServiceMetrics::new()),
        }
    }

    /// Use a shared metrics registry instead of an owned one.
    pub fn with_metrics(mut self, metrics: Arc<ServiceMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    /// Verify a single photo.
    ///
    /// Label and face detection run concurrently; either failing aborts the
    /// call before any decision is made. A failed verdict with a contact
    /// number triggers exactly one notification attempt.
    pub async fn verify_photo(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, ServiceError> {
        let started = Instant::now();
        self.metrics.verifications_total.inc();

        tracing::debug!(photo = %request.photo, "fetching detections");

        let (labels, faces) = tokio::join!(
            self.labels.detect_labels(&request.photo),
            self.faces.detect_faces(&request.photo),
        );
        let labels = match labels {
            Ok(labels) => labels,
            Err(e) => {
                self.metrics.provider_errors.inc();
                tracing::warn!(provider = self.labels.name(), error = %e, "label detection failed");
                return Err(e.into());
            }
        };
        let faces = match faces {
            Ok(faces) => faces,
            Err(e) => {
                self.metrics.provider_errors.inc();
                tracing::warn!(provider = self.faces.name(), error = %e, "face detection failed");
                return Err(e.into());
            }
        };

        let outcome = self.verifier.verify(request, &labels, &faces);

        tracing::info!(
            photo = %request.photo,
            passed = outcome.verdict.passed,
            is_outdoor = outcome.verdict.is_outdoor,
            has_face = outcome.verdict.has_face,
            matches = outcome.classification.matches.len(),
            "verification decided"
        );

        if outcome.verdict.passed {
            self.metrics.verifications_passed.inc();
        } else {
            self.metrics.verifications_failed.inc();
        }

        if let Some(message) = &outcome.notification {
            match self.messenger.send(message).await {
                Ok(()) => {
                    self.metrics.notifications_sent.inc();
                    tracing::info!(to = %message.to, "accountability notification sent");
                }
                Err(e) => {
                    self.metrics.notify_errors.inc();
                    tracing::warn!(
                        messenger = self.messenger.name(),
                        error = %e,
                        "notification dispatch failed"
                    );
                    return Err(e.into());
                }
            }
        }

        self.metrics
            .verification_latency_ms
            .observe(started.elapsed().as_millis() as f64);

        Ok(outcome)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ventus_nullables::{NullFaceProvider, NullLabelProvider, NullMessenger};
    use ventus_types::{FaceDetection, LabelDetection, PhotoRef};
    use ventus_verification::ClassificationPolicy;

    fn verifier() -> PhotoVerifier {
        PhotoVerifier::new(
            Default::default(),
            ClassificationPolicy::strict(),
            false,
            "+15005550006",
        )
    }

    fn service(
        labels: NullLabelProvider,
        faces: NullFaceProvider,
        messenger: NullMessenger,
    ) -> VerificationService {
        VerificationService::new(
            verifier(),
            Arc::new(labels),
            Arc::new(faces),
            Arc::new(messenger),
        )
    }

    #[tokio::test]
    async fn passing_photo_yields_passed_outcome() {
        let svc = service(
            NullLabelProvider::returning(vec![LabelDetection::new("Sky", 92.0)]),
            NullFaceProvider::returning(vec![FaceDetection::new(0.1, 0.1, 0.2, 0.2, 99.0)]),
            NullMessenger::new(),
        );

        let request = VerificationRequest::new(PhotoRef::uri("s3://photos/morning.jpg"));
        let outcome = svc.verify_photo(&request).await.unwrap();

        assert!(outcome.verdict.passed);
        assert!(outcome.notification.is_none());
        assert_eq!(svc.metrics().verifications_passed.get(), 1);
    }

    #[tokio::test]
    async fn both_detectors_are_queried_once() {
        let labels = Arc::new(NullLabelProvider::returning(vec![LabelDetection::new(
            "Tree", 80.0,
        )]));
        let faces = Arc::new(NullFaceProvider::returning(Vec::new()));
        let svc = VerificationService::new(
            verifier(),
            labels.clone(),
            faces.clone(),
            Arc::new(NullMessenger::new()),
        );

        let request = VerificationRequest::new(PhotoRef::s3("ventus-photos", "u1/p1.jpg"));
        svc.verify_photo(&request).await.unwrap();

        assert_eq!(labels.call_count(), 1);
        assert_eq!(faces.call_count(), 1);
    }

    #[tokio::test]
    async fn shared_metrics_accumulate_across_services() {
        let metrics = Arc::new(ServiceMetrics::new());
        let request = VerificationRequest::new(PhotoRef::uri("s3://photos/morning.jpg"));

        for _ in 0..2 {
            let svc = service(
                NullLabelProvider::returning(vec![LabelDetection::new("Sky", 92.0)]),
                NullFaceProvider::returning(Vec::new()),
                NullMessenger::new(),
            )
            .with_metrics(metrics.clone());
            svc.verify_photo(&request).await.unwrap();
        }

        assert_eq!(metrics.verifications_total.get(), 2);
        assert_eq!(metrics.verifications_passed.get(), 2);
    }
}
