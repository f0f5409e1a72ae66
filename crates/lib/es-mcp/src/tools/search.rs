use es_core::query::QuerySpec;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{EsMcp, helpers};

/// Parameters for a full-text search.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchIndexParams {
    /// Index, alias or pattern to search.
    pub index_name: String,
    /// Query string syntax text, or a complete search request body.
    pub query: Value,
}

/// Parameters for a semantic search.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SemanticSearchParams {
    pub index_name: String,
    /// `semantic_text` field to query.
    pub field: String,
    /// Natural language text, or a complete search request body.
    pub query: Value,
}

#[tool_router(router = tool_router_search, vis = "pub")]
impl EsMcp {
    #[tool(description = "List the names of all user-visible Elasticsearch indices, comma separated.")]
    async fn list_index_names(&self) -> Result<CallToolResult, ErrorData> {
        let names = self.control().list_index_names().await;
        helpers::text_result(names.map(|names| names.join(",")))
    }

    #[tool(description = "Search an Elasticsearch index. A string query uses query string syntax; an object is sent as the full search request body.")]
    async fn search_index(
        &self,
        Parameters(params): Parameters<SearchIndexParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let response = self
            .control()
            .search(&params.index_name, QuerySpec::from(params.query))
            .await;
        helpers::json_result(response)
    }

    #[tool(description = "Semantic search over a semantic_text field of an Elasticsearch index. An object query is sent as the full search request body.")]
    async fn semantic_search(
        &self,
        Parameters(params): Parameters<SemanticSearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let response = self
            .control()
            .semantic_search(&params.index_name, &params.field, QuerySpec::from(params.query))
            .await;
        helpers::json_result(response)
    }
}
