//! MCP tool modules.
//!
//! Tools are grouped by domain: index search over arbitrary indices, and
//! digest-style search over crawler-populated documentation indices.

pub mod crawler;
pub mod search;
