//! Result helpers for tool responses

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

/// Pretty-print `data` as the single text content of a successful result.
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(format!("JSON error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
