use std::borrow::Cow;

use es_core::control::OperationError;
use es_core::models::ErrorRecord;
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

fn internal(err: impl std::fmt::Display) -> ErrorData {
    mcp_err(ErrorCode::INTERNAL_ERROR, err.to_string())
}

/// Renders a facade outcome as JSON, substituting the error record on failure.
pub fn outcome_json<T: Serialize>(result: Result<T, OperationError>) -> Result<Value, ErrorData> {
    match result {
        Ok(value) => serde_json::to_value(value).map_err(internal),
        Err(err) => serde_json::to_value(ErrorRecord::from(err)).map_err(internal),
    }
}

/// Tool result carrying the JSON success value or an error record.
pub fn json_result<T: Serialize>(
    result: Result<T, OperationError>,
) -> Result<CallToolResult, ErrorData> {
    match result {
        Ok(value) => Ok(CallToolResult::success(vec![Content::json(value)?])),
        Err(err) => error_result(&err),
    }
}

/// Tool result carrying prose on success or an error record.
pub fn text_result(result: Result<String, OperationError>) -> Result<CallToolResult, ErrorData> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(err) => error_result(&err),
    }
}

fn error_result(err: &OperationError) -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::error(vec![Content::json(ErrorRecord::from(err))?]))
}

/// Builds a protocol descriptor from its wire form.
pub fn descriptor<T: DeserializeOwned>(wire: Value) -> Result<T, ErrorData> {
    serde_json::from_value(wire).map_err(internal)
}
