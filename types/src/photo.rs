//! Opaque photo references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a submitted photo lives.
///
/// The decision service never touches photo bytes; it hands the reference to
/// the detection engine and otherwise treats it as opaque. Serialized untagged:
/// a bare string is a URI, an object with `bucket`/`key` is object storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoRef {
    /// A photo in object storage.
    S3 { bucket: String, key: String },
    /// Any directly fetchable URI.
    Uri(String),
}

impl PhotoRef {
    pub fn s3(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self::S3 {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S3 { bucket, key } => write!(f, "{bucket}/{key}"),
            Self::Uri(uri) => write!(f, "{uri}"),
        }
    }
}
