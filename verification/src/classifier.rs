//! Outdoor-scene classification from label detections.

use crate::error::VerificationError;
use ventus_types::{LabelDetection, OutdoorLabelSet};

/// Decision thresholds for outdoor classification.
///
/// `confidence_threshold` is on the provider's 0-100 scale and is exclusive:
/// a label sitting exactly at the threshold does not qualify. `min_matches`
/// is how many qualifying labels a photo needs before it counts as outdoors.
///
/// The strict and corroborated presets are plain instances of this type;
/// there is no mode switch anywhere downstream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassificationPolicy {
    confidence_threshold: f64,
    min_matches: u32,
}

impl ClassificationPolicy {
    /// Builds a policy, rejecting thresholds outside 0-100 and a zero match count.
    pub fn new(confidence_threshold: f64, min_matches: u32) -> Result<Self, VerificationError> {
        if !(0.0..=100.0).contains(&confidence_threshold) {
            return Err(VerificationError::InvalidThreshold(confidence_threshold));
        }
        if min_matches == 0 {
            return Err(VerificationError::InvalidMinMatches);
        }
        Ok(Self {
            confidence_threshold,
            min_matches,
        })
    }

    /// One label above 70: a single high-confidence hit is enough.
    pub fn strict() -> Self {
        Self {
            confidence_threshold: 70.0,
            min_matches: 1,
        }
    }

    /// Two labels above 60: a lower bar, but the hits must corroborate.
    pub fn corroborated() -> Self {
        Self {
            confidence_threshold: 60.0,
            min_matches: 2,
        }
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    pub fn min_matches(&self) -> u32 {
        self.min_matches
    }
}

/// Default is the strict single-label policy.
impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// The classifier's output: the outdoor call plus the labels that drove it.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    /// Whether enough qualifying labels were found.
    pub is_outdoor: bool,
    /// The qualifying labels, in the provider's original order.
    pub matches: Vec<LabelDetection>,
}

impl Classification {
    /// Sum of the matched confidences. Diagnostic only; never feeds the verdict.
    pub fn total_confidence(&self) -> f64 {
        self.matches.iter().map(|m| m.confidence).sum()
    }

    /// The highest-confidence match, if any.
    pub fn best_match(&self) -> Option<&LabelDetection> {
        self.matches
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

/// Classifies label detections as outdoor evidence.
///
/// A label qualifies when its name is in `outdoor_set` (exact, case-sensitive)
/// and its confidence is strictly greater than the policy threshold. The photo
/// is outdoors when at least `min_matches` labels qualify. Each detection
/// counts on its own, so repeated names accumulate. The input is never
/// mutated and an empty slice is a valid no-evidence input.
pub fn classify_outdoor(
    labels: &[LabelDetection],
    outdoor_set: &OutdoorLabelSet,
    policy: &ClassificationPolicy,
) -> Classification {
    let matches: Vec<LabelDetection> = labels
        .iter()
        .filter(|l| outdoor_set.contains(&l.name) && l.confidence > policy.confidence_threshold())
        .cloned()
        .collect();

    Classification {
        is_outdoor: matches.len() as u32 >= policy.min_matches(),
        matches,
    }
}
