//! Handler implementations for session-task-mcp tools
//!
//! Each handler unpacks tool params, calls the session store, and wraps the
//! outcome as a `CallToolResult`. Store errors convert into MCP errors.

use rmcp::{model::CallToolResult, ErrorData as McpError};

use crate::params::*;
use crate::response::json_success;
use crate::store::SessionStore;
use crate::types::{
    AddTaskResponse, CreateSessionResponse, NextTaskResponse, TaskListResponse,
    UpdateStatusResponse, UpdateTasksResponse,
};

// ============================================================================
// Session Lifecycle
// ============================================================================

pub async fn create_session(
    store: &SessionStore,
    params: CreateSessionParams,
) -> Result<CallToolResult, McpError> {
    let (session_id, tasks) = store.create(params.initial_tasks)?;
    json_success(&CreateSessionResponse { session_id, tasks })
}

// ============================================================================
// Task Operations
// ============================================================================

pub async fn add_task(
    store: &SessionStore,
    params: AddTaskParams,
) -> Result<CallToolResult, McpError> {
    let added_task = store.add_task(&params.session_id, params.description)?;
    json_success(&AddTaskResponse { added_task })
}

pub async fn get_tasks(
    store: &SessionStore,
    params: GetTasksParams,
) -> Result<CallToolResult, McpError> {
    let tasks = store.list_tasks(
        &params.session_id,
        params.task_id.as_deref(),
        params.status.unwrap_or_default(),
    )?;

    json_success(&TaskListResponse {
        total: tasks.len(),
        tasks,
    })
}

pub async fn update_task_status(
    store: &SessionStore,
    params: UpdateTaskStatusParams,
) -> Result<CallToolResult, McpError> {
    let (updated_task, tasks) =
        store.update_task_status(&params.session_id, &params.task_id, params.status)?;
    json_success(&UpdateStatusResponse {
        updated_task,
        tasks,
    })
}

pub async fn update_tasks(
    store: &SessionStore,
    params: UpdateTasksParams,
) -> Result<CallToolResult, McpError> {
    let tasks = store.update_tasks(&params.session_id, params.tasks)?;
    json_success(&UpdateTasksResponse { tasks })
}

pub async fn get_next_pending_task(
    store: &SessionStore,
    params: GetNextPendingTaskParams,
) -> Result<CallToolResult, McpError> {
    let next_task = store.next_pending_task(&params.session_id)?;
    json_success(&NextTaskResponse::from(next_task))
}
