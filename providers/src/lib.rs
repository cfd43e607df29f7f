//! Detection providers.
//!
//! The decision service consumes two kinds of detections: per-label
//! confidence scores and face bounding boxes. This crate defines the provider
//! seams ([`LabelProvider`], [`FaceProvider`]) and the HTTP client for the
//! Ventus vision engine, which serves both.

pub mod engine;
pub mod error;
pub mod traits;

pub use engine::EngineClient;
pub use error::ProviderError;
pub use traits::{FaceProvider, LabelProvider};
