//! Label detections and the outdoor vocabulary.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Label names that count as outdoor evidence unless overridden by configuration.
///
/// Spelled exactly as the vision engine emits them; matching is case-sensitive.
pub const DEFAULT_OUTDOOR_LABELS: [&str; 12] = [
    "Outdoors", "Nature", "Sky", "Cloud", "Tree", "Building", "Street", "Road", "Grass",
    "Plant", "Flower", "Garden",
];

/// A single label the vision engine assigned to a photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelDetection {
    /// Label name as reported by the engine.
    pub name: String,
    /// Engine confidence on a 0-100 scale.
    pub confidence: f64,
}

impl LabelDetection {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// The set of label names accepted as evidence of an outdoor scene.
///
/// Membership is exact and case-sensitive, so the vocabulary must use the
/// engine's own spelling of each label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutdoorLabelSet(HashSet<String>);

impl OutdoorLabelSet {
    /// Builds a set from any collection of label names. Duplicates collapse.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Default is the product vocabulary in [`DEFAULT_OUTDOOR_LABELS`].
impl Default for OutdoorLabelSet {
    fn default() -> Self {
        Self::new(DEFAULT_OUTDOOR_LABELS)
    }
}

impl FromIterator<String> for OutdoorLabelSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
