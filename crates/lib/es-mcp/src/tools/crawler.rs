use es_core::format::format_hits;
use es_core::query::{DEFAULT_CRAWLER_SIZE, QuerySpec};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{EsMcp, helpers};

pub const DEFAULT_DOCS_INDEX: &str = "search-elastic-docs";
pub const DEFAULT_BLOGS_INDEX: &str = "search-blog-search-labs";

/// Crawler-populated indices backing the documentation tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerIndices {
    pub docs: String,
    pub blogs: String,
}

impl Default for CrawlerIndices {
    fn default() -> Self {
        Self {
            docs: DEFAULT_DOCS_INDEX.to_string(),
            blogs: DEFAULT_BLOGS_INDEX.to_string(),
        }
    }
}

/// Parameters for searching a crawler index.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CrawlerSearchParams {
    /// Natural language query; the index uses sparse embeddings.
    pub query: String,
    /// Maximum number of pages returned (default 5).
    pub size: Option<usize>,
}

impl EsMcp {
    async fn crawler_digest(
        &self,
        index_name: &str,
        params: CrawlerSearchParams,
    ) -> Result<CallToolResult, ErrorData> {
        let size = params.size.unwrap_or(DEFAULT_CRAWLER_SIZE);
        let hits = self
            .control()
            .search_crawler_resource(index_name, QuerySpec::from(params.query), size)
            .await;
        helpers::text_result(hits.map(|hits| format_hits(&hits)))
    }
}

#[tool_router(router = tool_router_crawler, vis = "pub")]
impl EsMcp {
    #[tool(description = "Semantic search across Elastic documentation. The data uses sparse embeddings, so phrase the query for semantic matching. Returns titles, links and excerpts of matching pages.")]
    async fn search_documentation(
        &self,
        Parameters(params): Parameters<CrawlerSearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.crawler_digest(&self.crawler_indices().docs, params).await
    }

    #[tool(description = "Semantic search across Elastic Search Labs blogs. The data uses sparse embeddings, so phrase the query for semantic matching. Returns titles, links and excerpts of matching posts.")]
    async fn search_blogs(
        &self,
        Parameters(params): Parameters<CrawlerSearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        self.crawler_digest(&self.crawler_indices().blogs, params).await
    }
}
