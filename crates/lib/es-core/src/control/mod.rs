use std::{fmt, sync::Arc};

use thiserror::Error;
use tracing::warn;

use crate::backend::{BackendError, SearchBackend};

pub mod catalog;
pub mod health;
pub mod search;

pub use search::reduce_crawler_hits;

/// Facade operations, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListIndices,
    IndexDetail,
    Search,
    SemanticSearch,
    CrawlerSearch,
    Health,
}

impl Operation {
    /// Prefix of the message reported when the backend call fails.
    #[must_use]
    pub const fn failure_prefix(self) -> &'static str {
        match self {
            Self::ListIndices => "Failed to retrieve indices",
            Self::IndexDetail => "Failed to retrieve index details",
            Self::Search | Self::CrawlerSearch => "Search failed",
            Self::SemanticSearch => "Semantic Search failed",
            Self::Health => "Error",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListIndices => "list_indices",
            Self::IndexDetail => "get_index_detail",
            Self::Search => "search",
            Self::SemanticSearch => "semantic_search",
            Self::CrawlerSearch => "search_crawler_resource",
            Self::Health => "is_configured",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure of a facade operation.
///
/// The `Display` output is the message clients see.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The referenced index does not exist.
    #[error("Index '{0}' does not exist")]
    NotFound(String),

    /// A listing succeeded but returned nothing.
    #[error("No indices found")]
    EmptyResult,

    /// The backend call itself failed.
    #[error("{}: {source}", .operation.failure_prefix())]
    Backend {
        operation: Operation,
        source: BackendError,
    },
}

impl OperationError {
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        match self {
            Self::Backend { operation, .. } => Some(*operation),
            Self::NotFound(_) | Self::EmptyResult => None,
        }
    }
}

/// Builds the error mapper for one operation, logging the failure.
fn backend_failure(operation: Operation) -> impl FnOnce(BackendError) -> OperationError {
    move |source| {
        warn!(operation = %operation, error = %source, "Backend call failed");
        OperationError::Backend { operation, source }
    }
}

/// Translates semantic operations into single backend calls.
#[derive(Clone)]
pub struct EsControlPlane {
    backend: Arc<dyn SearchBackend>,
}

impl EsControlPlane {
    #[must_use]
    pub fn new(backend: impl SearchBackend + 'static) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    #[must_use]
    pub fn from_arc(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &dyn SearchBackend {
        self.backend.as_ref()
    }
}
