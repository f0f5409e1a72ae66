//! Markdown digest of result records.

use serde::Serialize;
use serde_json::Value;

/// Renders records as a Markdown digest, one bullet per attribute.
///
/// Records are rendered in their natural key order whatever their shape, so
/// the output works for any record type the control plane produces. A record
/// that fails to serialize is rendered as its error text.
#[must_use]
pub fn format_hits<T: Serialize>(hits: &[T]) -> String {
    if hits.is_empty() {
        return "### 0 results".to_string();
    }

    let rendered: Vec<String> = hits
        .iter()
        .map(|hit| {
            serde_json::to_value(hit).map_or_else(
                |err| format!("- **error:** {err}"),
                |record| render_record(&record),
            )
        })
        .collect();

    format!("Here are {} results:\n\n{}", hits.len(), rendered.join("\n\n"))
}

fn render_record(record: &Value) -> String {
    match record {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| format!("- **{key}:** {}", render_value(value)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => format!("- {}", render_value(other)),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
