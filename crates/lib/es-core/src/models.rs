//! Records returned by the control plane.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::control::OperationError;

/// Index name plus the backend's statistics for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDetail {
    pub name: String,
    pub stats: Value,
}

/// A crawler-ingested document reduced to what a reader needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlerHit {
    pub title: String,
    pub url: String,
    pub content: Vec<String>,
}

/// Uniform failure payload handed to MCP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&OperationError> for ErrorRecord {
    fn from(err: &OperationError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<OperationError> for ErrorRecord {
    fn from(err: OperationError) -> Self {
        Self::from(&err)
    }
}
