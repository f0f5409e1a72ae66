//! MCP server runners for es-mcp.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig,
    StreamableHttpService,
    session::local::LocalSessionManager,
};
use tracing::info;

use crate::EsMcp;

pub const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";

/// Configuration for the MCP streamable HTTP server.
#[derive(Debug, Clone)]
pub struct McpHttpServerConfig {
    pub addr: SocketAddr,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
}

impl McpHttpServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            stateful_mode: true,
            sse_keep_alive: Some(Duration::from_secs(15)),
            sse_retry: Some(Duration::from_secs(3)),
        }
    }

    #[must_use]
    pub const fn with_stateful_mode(mut self, stateful_mode: bool) -> Self {
        self.stateful_mode = stateful_mode;
        self
    }

    #[must_use]
    pub const fn with_sse_keep_alive(mut self, sse_keep_alive: Option<Duration>) -> Self {
        self.sse_keep_alive = sse_keep_alive;
        self
    }
}

/// Serves the MCP server over stdio.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(service: EsMcp) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Serving MCP over stdio");
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout)).await?;
    let _ = running.waiting().await?;
    Ok(())
}

/// Serves the MCP server using streamable HTTP transport.
///
/// The MCP endpoint is mounted at `/mcp`, next to a plain `/health` route.
///
/// # Errors
/// Returns any listener or server error.
pub async fn serve_streamable_http(
    service: EsMcp,
    config: McpHttpServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mcp: StreamableHttpService<EsMcp, LocalSessionManager> = StreamableHttpService::new(
        move || Ok(service.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig {
            sse_keep_alive: config.sse_keep_alive,
            sse_retry: config.sse_retry,
            stateful_mode: config.stateful_mode,
            ..Default::default()
        },
    );

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", mcp);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Serving MCP over streamable HTTP at /mcp");
    axum::serve(listener, app).await?;
    Ok(())
}
