//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};

use ventus_types::{OutdoorLabelSet, DEFAULT_OUTDOOR_LABELS};
use ventus_verification::ClassificationPolicy;

use crate::logging::LogFormat;
use crate::orchestrator::PhotoVerifier;
use crate::ServiceError;

/// Configuration for the verification service.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every decision-relevant setting
/// lives here explicitly; nothing is read from ambient process state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Label names accepted as outdoor evidence (exact, case-sensitive).
    #[serde(default = "default_outdoor_labels")]
    pub outdoor_labels: Vec<String>,

    /// Confidence a label must strictly exceed to qualify (0-100).
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Qualifying labels needed before a photo counts as outdoors.
    #[serde(default = "default_min_matches")]
    pub min_matches: u32,

    /// Whether a pass additionally requires a detected face.
    #[serde(default)]
    pub require_face: bool,

    /// Base URL of the vision engine.
    #[serde(default = "default_engine_url")]
    pub engine_url: String,

    /// Most labels to request from the engine per photo.
    #[serde(default = "default_engine_max_labels")]
    pub engine_max_labels: u32,

    /// Engine-side confidence floor for reported labels. Kept below the
    /// decision threshold so the classifier stays the deciding layer.
    #[serde(default = "default_engine_min_confidence")]
    pub engine_min_confidence: f64,

    /// Base URL of the SMS gateway.
    #[serde(default = "default_sms_gateway_url")]
    pub sms_gateway_url: String,

    /// Sender number for accountability notifications.
    #[serde(default = "default_sms_from")]
    pub sms_from: String,

    /// Bearer token for the SMS gateway, if it requires one.
    #[serde(default)]
    pub sms_token: Option<String>,

    /// Notification template used when a request carries none.
    #[serde(default)]
    pub message_template: Option<String>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_outdoor_labels() -> Vec<String> {
    DEFAULT_OUTDOOR_LABELS.iter().map(|s| s.to_string()).collect()
}

fn default_confidence_threshold() -> f64 {
    70.0
}

fn default_min_matches() -> u32 {
    1
}

fn default_engine_url() -> String {
    "http://127.0.0.1:50051".to_string()
}

fn default_engine_max_labels() -> u32 {
    20
}

fn default_engine_min_confidence() -> f64 {
    50.0
}

fn default_sms_gateway_url() -> String {
    "https://sms.ventus.app".to_string()
}

fn default_sms_from() -> String {
    "+15005550006".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ServiceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ServiceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ServiceError> {
        toml::from_str(s).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ServiceConfig is always serializable to TOML")
    }

    /// Check the decision settings for consistency.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.outdoor_labels.is_empty() {
            return Err(ServiceError::Config(
                "outdoor_labels must not be empty".to_string(),
            ));
        }
        ClassificationPolicy::new(self.confidence_threshold, self.min_matches)?;
        if self.engine_url.is_empty() {
            return Err(ServiceError::Config("engine_url must not be empty".to_string()));
        }
        if self.sms_from.is_empty() {
            return Err(ServiceError::Config("sms_from must not be empty".to_string()));
        }
        self.log_format()?;
        Ok(())
    }

    /// The configured outdoor vocabulary as a membership set.
    pub fn outdoor_set(&self) -> OutdoorLabelSet {
        OutdoorLabelSet::new(self.outdoor_labels.iter().cloned())
    }

    /// The configured log format.
    pub fn log_format(&self) -> Result<LogFormat, ServiceError> {
        self.log_format.parse().map_err(ServiceError::Config)
    }

    /// Build the pure verifier from the decision settings.
    pub fn verifier(&self) -> Result<PhotoVerifier, ServiceError> {
        self.validate()?;
        let policy = ClassificationPolicy::new(self.confidence_threshold, self.min_matches)?;

        let mut verifier = PhotoVerifier::new(
            self.outdoor_set(),
            policy,
            self.require_face,
            self.sms_from.as_str(),
        );
        if let Some(template) = &self.message_template {
            verifier = verifier.with_default_template(template.as_str());
        }
        Ok(verifier)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            outdoor_labels: default_outdoor_labels(),
            confidence_threshold: default_confidence_threshold(),
            min_matches: default_min_matches(),
            require_face: false,
            engine_url: default_engine_url(),
            engine_max_labels: default_engine_max_labels(),
            engine_min_confidence: default_engine_min_confidence(),
            sms_gateway_url: default_sms_gateway_url(),
            sms_from: default_sms_from(),
            sms_token: None,
            message_template: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
