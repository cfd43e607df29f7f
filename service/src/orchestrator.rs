//! The pure verification orchestrator.
//!
//! Coordinates one photo verification:
//! 1. Classify the label detections against the outdoor vocabulary
//! 2. Check face presence
//! 3. Evaluate the policy into a terminal verdict
//! 4. On failure with a designated contact, compose the notification
//!
//! No I/O happens here: detections come in as data, the composed
//! notification goes out as data. The async service around it owns the
//! fetching and the dispatch.

use ventus_notify::{compose_notification, NotificationMessage};
use ventus_types::{FaceDetection, LabelDetection, OutdoorLabelSet, VerificationRequest};
use ventus_verification::{
    classify_outdoor, evaluate, has_face, Classification, ClassificationPolicy,
    VerificationVerdict,
};

// ---------------------------------------------------------------------------
// VerificationOutcome
// ---------------------------------------------------------------------------

/// Everything one verification produced.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationOutcome {
    /// The terminal verdict.
    pub verdict: VerificationVerdict,
    /// The classification behind the verdict, kept for logging.
    pub classification: Classification,
    /// The notification to dispatch, composed only when the verdict failed
    /// and the request names a contact.
    pub notification: Option<NotificationMessage>,
}

// ---------------------------------------------------------------------------
// PhotoVerifier
// ---------------------------------------------------------------------------

/// Applies the verification rules under one fixed configuration.
///
/// The verifier owns every decision-relevant setting explicitly: the outdoor
/// vocabulary, the classification thresholds, the face requirement, and the
/// notification defaults. Policy variants are different instances of this
/// type, never different code paths.
pub struct PhotoVerifier {
    /// Accepted outdoor label names.
    outdoor_set: OutdoorLabelSet,
    /// Classification thresholds.
    policy: ClassificationPolicy,
    /// Whether a pass additionally requires a detected face.
    require_face: bool,
    /// Sender number stamped on composed notifications.
    sms_from: String,
    /// Configured fallback template when the request brings none.
    default_template: Option<String>,
}

impl PhotoVerifier {
    /// Create a verifier with the given decision configuration.
    pub fn new(
        outdoor_set: OutdoorLabelSet,
        policy: ClassificationPolicy,
        require_face: bool,
        sms_from: impl Into<String>,
    ) -> Self {
        Self {
            outdoor_set,
            policy,
            require_face,
            sms_from: sms_from.into(),
            default_template: None,
        }
    }

    /// Set the configured notification template, used when a request does not
    /// carry its own.
    pub fn with_default_template(mut self, template: impl Into<String>) -> Self {
        self.default_template = Some(template.into());
        self
    }

    pub fn require_face(&self) -> bool {
        self.require_face
    }

    pub fn policy(&self) -> &ClassificationPolicy {
        &self.policy
    }

    /// Run one verification over already-fetched detections.
    ///
    /// Template precedence for the notification body: the request's template,
    /// else the configured default, else the built-in text.
    pub fn verify(
        &self,
        request: &VerificationRequest,
        labels: &[LabelDetection],
        faces: &[FaceDetection],
    ) -> VerificationOutcome {
        let classification = classify_outdoor(labels, &self.outdoor_set, &self.policy);
        let verdict = evaluate(classification.is_outdoor, has_face(faces), self.require_face);

        let notification = if verdict.passed {
            None
        } else {
            request.contact_phone.as_ref().map(|contact| {
                let template = request
                    .message_template
                    .as_deref()
                    .or(self.default_template.as_deref());
                let body = compose_notification(template, request.user_name.as_deref());
                NotificationMessage::new(body, self.sms_from.clone(), contact.clone())
            })
        };

        VerificationOutcome {
            verdict,
            classification,
            notification,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
