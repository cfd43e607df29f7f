//! Ventus verification service.
//!
//! Ties the decision core to its collaborators:
//! 1. Fetch label and face detections for the submitted photo (concurrently).
//! 2. Run the pure decision rules ([`PhotoVerifier`]).
//! 3. On a failed verdict with a designated contact, dispatch the
//!    accountability SMS, at most once.
//!
//! A failed *verdict* is a normal `Ok` result; only collaborator failures
//! (detection or delivery) surface as [`ServiceError`].

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod orchestrator;
pub mod response;
pub mod service;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use logging::{init_logging, LogFormat};
pub use metrics::ServiceMetrics;
pub use orchestrator::{PhotoVerifier, VerificationOutcome};
pub use response::{VerificationResponse, SUCCESS_MESSAGE};
pub use service::VerificationService;
