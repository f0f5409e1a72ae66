//! Canned conversations offered as MCP prompts.

use es_core::control::health::is_error_status;
use rmcp::model::{PromptMessage, PromptMessageRole};
use rmcp::schemars;
use serde::{Deserialize, Serialize};

pub const CONNECTION_QUESTION: &str = "Can you reach my Elasticsearch instance?";
pub const DEFAULT_DOMAIN: &str = "Salesforce";

/// Arguments for the data analysis prompt.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeDomainDataArgs {
    /// Index holding the data to analyze.
    pub index: String,
    /// Business domain of the data, e.g. `Salesforce`.
    pub domain: Option<String>,
}

/// Exchange reporting the outcome of a reachability check.
#[must_use]
pub fn connection_messages(status: &str) -> Vec<PromptMessage> {
    let answer = if is_error_status(status) {
        format!("I tried connecting, but encountered an error: {status}")
    } else {
        format!("Connected successfully! Elasticsearch status: {status}")
    };
    vec![
        PromptMessage::new_text(PromptMessageRole::User, CONNECTION_QUESTION),
        PromptMessage::new_text(PromptMessageRole::Assistant, answer),
    ]
}

/// Exchange asking the assistant to analyze the data held in `index`.
#[must_use]
pub fn analysis_messages(index: &str, domain: Option<&str>) -> Vec<PromptMessage> {
    let domain = domain
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_DOMAIN);
    vec![
        PromptMessage::new_text(
            PromptMessageRole::User,
            format!("What can you tell me about this {domain} data?"),
        ),
        PromptMessage::new_text(PromptMessageRole::User, index),
        PromptMessage::new_text(
            PromptMessageRole::Assistant,
            format!("I'll analyze this {domain} data. Here are some initial observations:"),
        ),
    ]
}
