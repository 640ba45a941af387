//! In-process tool dispatch
//!
//! Lets a host call the server's tools directly by name, without a
//! transport in between. Tests drive the server through this surface too.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Error returned by the tool itself (validation, not found, ...)
    #[error("mcp error: {}", .0.message)]
    McpError(rmcp::ErrorData),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err)
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used in MCP client configuration
    fn server_name(&self) -> &str;

    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool by name with JSON arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }
}
