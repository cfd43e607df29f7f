//! HTTP client for the Ventus vision engine.

use crate::error::ProviderError;
use crate::traits::{FaceProvider, LabelProvider};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use ventus_types::{FaceDetection, LabelDetection, PhotoRef};

/// Default timeout for detection requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Most labels a single detection request asks for.
const DEFAULT_MAX_LABELS: u32 = 20;

/// Engine-side reporting floor. Kept low so the classifier's configured
/// threshold stays the deciding one.
const DEFAULT_MIN_CONFIDENCE: f64 = 50.0;

/// Client for the Ventus vision engine.
///
/// The engine exposes two JSON endpoints:
/// - `POST /v1/detect/labels` with `{"photo", "max_labels", "min_confidence"}`
///   returning `{"labels": [{"name", "confidence"}, ...]}`
/// - `POST /v1/detect/faces` with `{"photo"}` returning
///   `{"faces": [{"x", "y", "width", "height", "confidence"}, ...]}`
///
/// One client serves both provider seams.
pub struct EngineClient {
    /// Base URL of the engine.
    base_url: String,
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    /// Most labels to request per photo.
    max_labels: u32,
    /// Engine-side confidence floor for reported labels.
    min_confidence: f64,
}

#[derive(Debug, Serialize)]
struct DetectLabelsRequest<'a> {
    photo: &'a PhotoRef,
    max_labels: u32,
    min_confidence: f64,
}

#[derive(Debug, Serialize)]
struct DetectFacesRequest<'a> {
    photo: &'a PhotoRef,
}

/// Raw JSON response from the labels endpoint.
#[derive(Debug, Deserialize)]
struct LabelsResponse {
    labels: Vec<RawLabel>,
}

#[derive(Debug, Deserialize)]
struct RawLabel {
    name: String,
    confidence: f64,
}

/// Raw JSON response from the faces endpoint.
#[derive(Debug, Deserialize)]
struct FacesResponse {
    faces: Vec<RawFace>,
}

#[derive(Debug, Deserialize)]
struct RawFace {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    confidence: f32,
}

impl EngineClient {
    /// Create a client for the given engine with default settings.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            max_labels: DEFAULT_MAX_LABELS,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Cap the number of labels requested per photo.
    pub fn with_max_labels(mut self, max_labels: u32) -> Self {
        self.max_labels = max_labels;
        self
    }

    /// Set the engine-side confidence floor for reported labels.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON payload to an engine endpoint and parse the JSON response.
    async fn post_json<P, T>(&self, path: &str, payload: &P) -> Result<T, ProviderError>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Unreachable(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    ProviderError::Unreachable(format!("connection failed: {e}"))
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse detection response: {e}"))
        })
    }
}

#[async_trait]
impl LabelProvider for EngineClient {
    async fn detect_labels(&self, photo: &PhotoRef) -> Result<Vec<LabelDetection>, ProviderError> {
        let request = DetectLabelsRequest {
            photo,
            max_labels: self.max_labels,
            min_confidence: self.min_confidence,
        };
        let response: LabelsResponse = self.post_json("/v1/detect/labels", &request).await?;

        Ok(response
            .labels
            .into_iter()
            .map(|l| LabelDetection::new(l.name, l.confidence))
            .collect())
    }

    fn name(&self) -> &str {
        "ventus-engine"
    }
}

#[async_trait]
impl FaceProvider for EngineClient {
    async fn detect_faces(&self, photo: &PhotoRef) -> Result<Vec<FaceDetection>, ProviderError> {
        let request = DetectFacesRequest { photo };
        let response: FacesResponse = self.post_json("/v1/detect/faces", &request).await?;

        Ok(response
            .faces
            .into_iter()
            .map(|f| FaceDetection::new(f.x, f.y, f.width, f.height, f.confidence))
            .collect())
    }

    fn name(&self) -> &str {
        "ventus-engine"
    }
}
