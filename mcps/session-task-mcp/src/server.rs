//! MCP Server implementation for session-scoped task lists
//!
//! This module defines the main MCP server that exposes session and task
//! operations as tools. Handler implementations are in the handlers module.

use async_trait::async_trait;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;

use crate::embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
use crate::handlers;
use crate::params::*;
use crate::store::SessionStore;

const INSTRUCTIONS: &str = "Session-scoped task list server. Call create_session with at least one \
     task description, then use the returned session_id with the other tools. Task ids are \
     numeric strings assigned in creation order; get_next_pending_task returns the pending \
     task with the lowest id. State lives in memory for the lifetime of the server.";

/// The main Session Task MCP Server
#[derive(Clone)]
pub struct SessionTaskMcpServer {
    store: SessionStore,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl SessionTaskMcpServer {
    pub fn new() -> Self {
        Self::with_store(SessionStore::new())
    }

    /// Serve an existing store, e.g. one shared with another component.
    pub fn with_store(store: SessionStore) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    // ========================================================================
    // Session Lifecycle
    // ========================================================================

    #[tool(description = "Create a new session seeded with one task per description")]
    async fn create_session(
        &self,
        Parameters(params): Parameters<CreateSessionParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_session(&self.store, params).await
    }

    // ========================================================================
    // Task Operations
    // ========================================================================

    #[tool(description = "Append a pending task to a session")]
    async fn add_task(
        &self,
        Parameters(params): Parameters<AddTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_task(&self.store, params).await
    }

    #[tool(description = "List a session's tasks, optionally by task id and status")]
    async fn get_tasks(
        &self,
        Parameters(params): Parameters<GetTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_tasks(&self.store, params).await
    }

    #[tool(description = "Set a task's status to pending or completed")]
    async fn update_task_status(
        &self,
        Parameters(params): Parameters<UpdateTaskStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_task_status(&self.store, params).await
    }

    #[tool(description = "Upsert tasks by id; returns all tasks sorted by numeric id")]
    async fn update_tasks(
        &self,
        Parameters(params): Parameters<UpdateTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_tasks(&self.store, params).await
    }

    #[tool(description = "Get the pending task with the lowest id, or null if none")]
    async fn get_next_pending_task(
        &self,
        Parameters(params): Parameters<GetNextPendingTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_next_pending_task(&self.store, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SessionTaskMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for SessionTaskMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for SessionTaskMcpServer {
    fn server_name(&self) -> &str {
        "session-task"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "create_session" => {
                let params: CreateSessionParams = serde_json::from_value(params)?;
                self.create_session(Parameters(params)).await.map_err(Into::into)
            }

            "add_task" => {
                let params: AddTaskParams = serde_json::from_value(params)?;
                self.add_task(Parameters(params)).await.map_err(Into::into)
            }

            "get_tasks" => {
                let params: GetTasksParams = serde_json::from_value(params)?;
                self.get_tasks(Parameters(params)).await.map_err(Into::into)
            }

            "update_task_status" => {
                let params: UpdateTaskStatusParams = serde_json::from_value(params)?;
                self.update_task_status(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "update_tasks" => {
                let params: UpdateTasksParams = serde_json::from_value(params)?;
                self.update_tasks(Parameters(params)).await.map_err(Into::into)
            }

            "get_next_pending_task" => {
                let params: GetNextPendingTaskParams = serde_json::from_value(params)?;
                self.get_next_pending_task(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
