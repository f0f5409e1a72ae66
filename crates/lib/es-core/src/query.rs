//! Query construction for the search operations.

use serde_json::{Value, json};

/// Field holding the crawler's semantic text and its inference chunks.
pub const CRAWLER_SEMANTIC_FIELD: &str = "semantic_body_content";

/// Source fields returned for crawler documents.
pub const CRAWLER_SOURCE_FIELDS: [&str; 3] = [
    "title",
    "url",
    "semantic_body_content.inference.chunks.text",
];

/// Default number of crawler documents returned per search.
pub const DEFAULT_CRAWLER_SIZE: usize = 5;

/// A search request as supplied by the caller.
///
/// Text is wrapped into the query shape of the operation that receives it;
/// a structured body is sent exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySpec {
    Text(String),
    Structured(Value),
}

impl QuerySpec {
    /// Body for a `query_string` search.
    #[must_use]
    pub fn into_query_string_body(self) -> Value {
        match self {
            Self::Text(query) => json!({
                "query": {
                    "query_string": {
                        "query": query
                    }
                }
            }),
            Self::Structured(body) => body,
        }
    }

    /// Body for a `semantic` search over `field`.
    #[must_use]
    pub fn into_semantic_body(self, field: &str) -> Value {
        match self {
            Self::Text(query) => json!({
                "query": {
                    "semantic": {
                        "field": field,
                        "query": query
                    }
                }
            }),
            Self::Structured(body) => body,
        }
    }

    /// Body for a crawler document search returning at most `size` documents.
    #[must_use]
    pub fn into_crawler_body(self, size: usize) -> Value {
        match self {
            Self::Text(query) => json!({
                "query": {
                    "semantic": {
                        "query": query,
                        "field": CRAWLER_SEMANTIC_FIELD
                    }
                },
                "_source": CRAWLER_SOURCE_FIELDS,
                "size": size
            }),
            Self::Structured(body) => body,
        }
    }
}

impl From<Value> for QuerySpec {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Structured(other),
        }
    }
}

impl From<String> for QuerySpec {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for QuerySpec {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
