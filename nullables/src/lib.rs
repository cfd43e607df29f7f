//! Nullable collaborators for deterministic testing.
//!
//! Every external collaborator of the service (detection providers, the
//! messenger) sits behind a trait. This crate provides test-friendly
//! implementations that:
//! - Return programmed values
//! - Record every call for assertions
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod messenger;
pub mod providers;

pub use messenger::NullMessenger;
pub use providers::{NullFaceProvider, NullLabelProvider};
