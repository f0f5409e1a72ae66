//! Core types and services for es-mcp.
//!
//! This crate owns the Elasticsearch backend client, translates generic search
//! requests into query-DSL bodies, and reduces raw results into compact records
//! and a readable digest for MCP clients.

pub mod backend;
pub mod control;
pub mod format;
pub mod models;
pub mod query;
