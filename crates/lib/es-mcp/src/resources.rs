//! Read-only resources exposed over MCP.
//!
//! - `elasticsearch://indices` lists the index catalog.
//! - `elasticsearch://indices/{index}` returns statistics for one index.

use std::borrow::Cow;

use rmcp::ErrorData;
use rmcp::model::{Resource, ResourceTemplate};
use serde_json::json;

use crate::helpers;

pub const INDICES_URI: &str = "elasticsearch://indices";
pub const INDEX_DETAIL_URI_TEMPLATE: &str = "elasticsearch://indices/{index}";

const INDEX_DETAIL_PREFIX: &str = "elasticsearch://indices/";

/// Resource addressed by a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRoute<'a> {
    Indices,
    /// Index name with the URI's percent-encoding removed.
    IndexDetail(Cow<'a, str>),
}

impl<'a> ResourceRoute<'a> {
    /// Resolves a resource URI, or `None` when nothing is served there.
    ///
    /// The index segment is percent-decoded, since clients encode it when
    /// filling the URI template.
    #[must_use]
    pub fn parse(uri: &'a str) -> Option<Self> {
        let uri = uri.trim();
        if uri == INDICES_URI || uri == INDEX_DETAIL_PREFIX {
            return Some(Self::Indices);
        }
        let index = uri.strip_prefix(INDEX_DETAIL_PREFIX)?;
        if index.is_empty() || index.contains('/') {
            return None;
        }
        let index = urlencoding::decode(index).ok()?;
        if index.is_empty() {
            return None;
        }
        Some(Self::IndexDetail(index))
    }
}

/// Static resources.
///
/// # Errors
/// Returns an internal error if a descriptor cannot be built.
pub fn resources() -> Result<Vec<Resource>, ErrorData> {
    Ok(vec![helpers::descriptor(json!({
        "uri": INDICES_URI,
        "name": "Elasticsearch Indices",
        "description": "Retrieve all Elasticsearch indices.",
        "mimeType": "application/json"
    }))?])
}

/// Parameterized resources.
///
/// # Errors
/// Returns an internal error if a descriptor cannot be built.
pub fn resource_templates() -> Result<Vec<ResourceTemplate>, ErrorData> {
    Ok(vec![helpers::descriptor(json!({
        "uriTemplate": INDEX_DETAIL_URI_TEMPLATE,
        "name": "Index Details",
        "description": "Retrieve details of a specific Elasticsearch index.",
        "mimeType": "application/json"
    }))?])
}
