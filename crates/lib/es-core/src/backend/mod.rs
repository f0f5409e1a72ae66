//! Backend interfaces and the Elasticsearch REST implementation.
//!
//! The facade only talks to [`SearchBackend`], so tests and alternative
//! deployments can swap the HTTP client for anything that answers the same
//! five calls.

pub mod elasticsearch;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use elasticsearch::ElasticsearchClient;

/// Errors raised by a backend call.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The configured endpoint is missing or cannot be used as a base URL.
    #[error("invalid Elasticsearch URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl BackendError {
    #[must_use]
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// The backend capabilities the facade relies on.
///
/// Each method maps to exactly one backend request.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Lists the index catalog as structured records.
    async fn cat_indices(&self) -> BackendResult<Vec<Value>>;

    /// Reports whether the index exists.
    async fn index_exists(&self, index: &str) -> BackendResult<bool>;

    /// Fetches index statistics.
    async fn index_stats(&self, index: &str) -> BackendResult<Value>;

    /// Executes a search request body against an index.
    async fn search(&self, index: &str, body: &Value) -> BackendResult<Value>;

    /// Fetches the cluster health report.
    async fn health_report(&self) -> BackendResult<Value>;
}
