use serde_json::Value;
use tracing::debug;

use crate::models::CrawlerHit;
use crate::query::QuerySpec;

use super::{EsControlPlane, Operation, OperationError, backend_failure};

/// Inference chunks kept per crawler document.
pub const MAX_CONTENT_CHUNKS: usize = 3;

const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_URL: &str = "#";

impl EsControlPlane {
    /// Runs a `query_string` search, or the caller's own request body.
    ///
    /// # Errors
    /// Returns a backend failure labelled `Search failed`.
    pub async fn search(&self, index_name: &str, query: QuerySpec) -> Result<Value, OperationError> {
        let body = query.into_query_string_body();
        self.backend
            .search(index_name, &body)
            .await
            .map_err(backend_failure(Operation::Search))
    }

    /// Runs a `semantic` search over `field`, or the caller's own request body.
    ///
    /// # Errors
    /// Returns a backend failure labelled `Semantic Search failed`.
    pub async fn semantic_search(
        &self,
        index_name: &str,
        field: &str,
        query: QuerySpec,
    ) -> Result<Value, OperationError> {
        let body = query.into_semantic_body(field);
        self.backend
            .search(index_name, &body)
            .await
            .map_err(backend_failure(Operation::SemanticSearch))
    }

    /// Searches a crawler-populated index and reduces each document to its
    /// title, url and leading content chunks.
    ///
    /// # Errors
    /// Returns a backend failure labelled `Search failed`.
    pub async fn search_crawler_resource(
        &self,
        index_name: &str,
        query: QuerySpec,
        size: usize,
    ) -> Result<Vec<CrawlerHit>, OperationError> {
        let body = query.into_crawler_body(size);
        let response = self
            .backend
            .search(index_name, &body)
            .await
            .map_err(backend_failure(Operation::CrawlerSearch))?;

        let hits = reduce_crawler_hits(&response, size);
        debug!(index = index_name, hits = hits.len(), "Crawler search completed");
        Ok(hits)
    }
}

/// Reduces a raw search response to at most `size` crawler hits.
///
/// Missing fields fall back to `"Untitled"`, `"#"` and empty chunk text; a
/// response without `hits.hits` yields no records.
#[must_use]
pub fn reduce_crawler_hits(response: &Value, size: usize) -> Vec<CrawlerHit> {
    response
        .pointer("/hits/hits")
        .and_then(Value::as_array)
        .map_or_else(Vec::new, |hits| {
            hits.iter().take(size).map(reduce_crawler_hit).collect()
        })
}

fn reduce_crawler_hit(hit: &Value) -> CrawlerHit {
    let source = hit.get("_source");
    let content = source
        .and_then(|source| source.pointer("/semantic_body_content/inference/chunks"))
        .and_then(Value::as_array)
        .map_or_else(Vec::new, |chunks| {
            chunks
                .iter()
                .take(MAX_CONTENT_CHUNKS)
                .map(|chunk| text_or(chunk.get("text"), ""))
                .collect()
        });

    CrawlerHit {
        title: text_or(source.and_then(|source| source.get("title")), DEFAULT_TITLE),
        url: text_or(source.and_then(|source| source.get("url")), DEFAULT_URL),
        content,
    }
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
