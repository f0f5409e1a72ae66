//! Daemon entry point for the Elasticsearch MCP server.
//!
//! Loads configuration from the environment, builds the Elasticsearch client,
//! and serves the MCP protocol over stdio or streamable HTTP.

mod client;
mod config;

use es_mcp::EsMcp;
use es_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::client::build_control_plane;
use crate::config::{EsConfig, Transport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // stdout carries the stdio transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = EsConfig::from_args()?;
    let control = build_control_plane(&config)?;
    let service = EsMcp::new(control, config.crawler.clone());
    log_endpoints(&service);

    match config.transport {
        Transport::Stdio => serve_stdio(service).await,
        Transport::Http(addr) => {
            serve_streamable_http(service, McpHttpServerConfig::new(addr)).await
        }
    }
}

fn log_endpoints(service: &EsMcp) {
    let endpoints = service.endpoints();
    for resource in &endpoints.resources {
        info!(resource = %resource, "Registered MCP resource");
    }
    for tool in &endpoints.tools {
        info!(tool = %tool, "Registered MCP tool");
    }
    for prompt in &endpoints.prompts {
        info!(prompt = %prompt, "Registered MCP prompt");
    }
}
