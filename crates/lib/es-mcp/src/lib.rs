//! MCP server implementation for es-mcp.
//!
//! This crate wires the Elasticsearch control plane into rmcp tool, resource
//! and prompt handlers and exposes the MCP-facing API surface.

mod helpers;
pub mod prompts;
pub mod resources;
pub mod server;
pub mod tools;

use std::sync::Arc;

use es_core::control::EsControlPlane;
use es_core::control::health::is_error_status;
use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::{router::prompt::PromptRouter, tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult,
        Content,
        ErrorCode,
        GetPromptRequestParams,
        GetPromptResult,
        ListPromptsResult,
        ListResourceTemplatesResult,
        ListResourcesResult,
        PaginatedRequestParams,
        PromptMessage,
        ReadResourceRequestParams,
        ReadResourceResult,
        ResourceContents,
        ServerCapabilities,
        ServerInfo,
    },
    prompt,
    prompt_handler,
    prompt_router,
    service::RequestContext,
    tool,
    tool_handler,
    tool_router,
};
use tracing::debug;

use crate::prompts::AnalyzeDomainDataArgs;
use crate::resources::ResourceRoute;
pub use crate::tools::crawler::CrawlerIndices;

const SERVER_INSTRUCTIONS: &str = r#"es-mcp exposes an Elasticsearch cluster through MCP.

Resources:
- `elasticsearch://indices` lists every index with its health, status, document count and size.
- `elasticsearch://indices/{index}` returns the statistics of one index.

Tools:
- `list_index_names` lists user-visible index names.
- `search_index` runs a query string search. Pass an object as `query` to send a full search body.
- `semantic_search` queries a `semantic_text` field. Pass an object as `query` to send a full search body.
- `search_documentation` and `search_blogs` return a digest of matching Elastic documentation pages
  and Search Labs blog posts.
- `health` returns the cluster status.

Prompts:
- `is_elasticsearch_configured` checks that the cluster is reachable.
- `analyze_domain_data` starts an analysis of the data held in an index.

Failures are reported as `{ "error": "..." }` records."#;

/// Names of every registered resource, tool and prompt.
#[derive(Debug, Clone, Default)]
pub struct EndpointListing {
    pub resources: Vec<String>,
    pub tools: Vec<String>,
    pub prompts: Vec<String>,
}

/// MCP server wrapper around the control plane and its routers.
#[derive(Clone)]
pub struct EsMcp {
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
    control: EsControlPlane,
    crawler: Arc<CrawlerIndices>,
}

impl EsMcp {
    /// Creates a new server over the given control plane.
    #[must_use]
    pub fn new(control: EsControlPlane, crawler: CrawlerIndices) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_search()
            + Self::tool_router_crawler();
        Self {
            tool_router,
            prompt_router: Self::prompt_router(),
            control,
            crawler: Arc::new(crawler),
        }
    }

    #[must_use]
    pub const fn control(&self) -> &EsControlPlane {
        &self.control
    }

    #[must_use]
    pub fn crawler_indices(&self) -> &CrawlerIndices {
        &self.crawler
    }

    /// Lists what this server registers, for startup diagnostics.
    #[must_use]
    pub fn endpoints(&self) -> EndpointListing {
        let mut tools: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        tools.sort();
        let mut prompts: Vec<String> = self
            .prompt_router
            .list_all()
            .into_iter()
            .map(|prompt| prompt.name.to_string())
            .collect();
        prompts.sort();

        EndpointListing {
            resources: vec![
                resources::INDICES_URI.to_string(),
                resources::INDEX_DETAIL_URI_TEMPLATE.to_string(),
            ],
            tools,
            prompts,
        }
    }

    /// Reads a resource and renders it as JSON text.
    ///
    /// Facade failures are rendered as error records, not protocol errors.
    pub(crate) async fn read_route(&self, route: ResourceRoute<'_>) -> Result<String, ErrorData> {
        let payload = match route {
            ResourceRoute::Indices => helpers::outcome_json(self.control.list_indices().await)?,
            ResourceRoute::IndexDetail(index) => {
                helpers::outcome_json(self.control.get_index_detail(&index).await)?
            }
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|err| helpers::mcp_err(ErrorCode::INTERNAL_ERROR, err.to_string()))
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl EsMcp {
    #[tool(description = "Health check. Returns the Elasticsearch cluster status (green, yellow, red or unknown).")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        let status = self.control.is_configured().await;
        if is_error_status(&status) {
            Ok(CallToolResult::error(vec![Content::text(status)]))
        } else {
            Ok(CallToolResult::success(vec![Content::text(status)]))
        }
    }
}

#[prompt_router]
impl EsMcp {
    /// Check whether the Elasticsearch instance is reachable and report its status.
    #[prompt(name = "is_elasticsearch_configured")]
    async fn is_elasticsearch_configured(&self) -> Vec<PromptMessage> {
        let status = self.control.is_configured().await;
        prompts::connection_messages(&status)
    }

    /// Ask for an analysis of the domain data stored in an Elasticsearch index.
    #[prompt(name = "analyze_domain_data")]
    async fn analyze_domain_data(
        &self,
        Parameters(args): Parameters<AnalyzeDomainDataArgs>,
    ) -> Vec<PromptMessage> {
        prompts::analysis_messages(&args.index, args.domain.as_deref())
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for EsMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resources::resources()?))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult::with_all_items(
            resources::resource_templates()?,
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let uri = request.uri;
        debug!(uri = %uri, "Reading resource");
        let Some(route) = ResourceRoute::parse(&uri) else {
            return Err(helpers::mcp_err(
                ErrorCode::RESOURCE_NOT_FOUND,
                format!("unknown resource: {uri}"),
            ));
        };
        let text = self.read_route(route).await?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}
