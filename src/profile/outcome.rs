//! The two-kind error taxonomy and the serialized result of one extraction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ProfileRecord;
use crate::EzError;

/// Why an extraction produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The page had no embedded-data marker.
    #[error("User not found")]
    NotFound,
    /// Anything else; carries the underlying failure's message verbatim.
    #[error("{0}")]
    Unclassified(String),
}

impl From<EzError> for ExtractError {
    fn from(e: EzError) -> Self {
        match e {
            EzError::NotFound => ExtractError::NotFound,
            other => ExtractError::Unclassified(other.to_string()),
        }
    }
}

/// Outcome of [`extract`](super::extract): a full record, or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extraction {
    /// Serialized as the bare record.
    Profile(Box<ProfileRecord>),
    /// Serialized as `{"error": "..."}`.
    Error { error: String },
}

impl Extraction {
    /// Builds the error shape from any message.
    pub fn error(msg: impl Into<String>) -> Self {
        Extraction::Error { error: msg.into() }
    }

    /// True for the `{"error": ...}` shape.
    pub fn is_error(&self) -> bool {
        matches!(self, Extraction::Error { .. })
    }

    /// The record, if extraction succeeded.
    pub fn profile(&self) -> Option<&ProfileRecord> {
        match self {
            Extraction::Profile(p) => Some(&**p),
            Extraction::Error { .. } => None,
        }
    }

    /// Single-line JSON.
    pub fn to_json(&self) -> String {
        // Only string-keyed maps and plain values: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": e.to_string() }).to_string()
        })
    }
}

impl From<Result<ProfileRecord, ExtractError>> for Extraction {
    fn from(res: Result<ProfileRecord, ExtractError>) -> Self {
        match res {
            Ok(p) => Extraction::Profile(Box::new(p)),
            Err(e) => Extraction::error(e.to_string()),
        }
    }
}
