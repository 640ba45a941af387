//! Parameter definitions for session-task-mcp tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{StatusFilter, Task, TaskStatus};

// ============================================================================
// Session Lifecycle
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateSessionParams {
    #[schemars(description = "Descriptions of the tasks to start the session with (at least one)")]
    pub initial_tasks: Vec<String>,
}

// ============================================================================
// Task Operations
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddTaskParams {
    #[schemars(description = "Session returned by create_session")]
    pub session_id: String,
    #[schemars(description = "What the new task is about")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTasksParams {
    #[schemars(description = "Session returned by create_session")]
    pub session_id: String,
    #[schemars(description = "Only return the task with this id")]
    #[serde(default)]
    pub task_id: Option<String>,
    #[schemars(description = "Filter by status: pending, completed or all (default)")]
    #[serde(default)]
    pub status: Option<StatusFilter>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskStatusParams {
    #[schemars(description = "Session returned by create_session")]
    pub session_id: String,
    #[schemars(description = "Id of the task to update")]
    pub task_id: String,
    #[schemars(description = "New status: pending or completed")]
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTasksParams {
    #[schemars(description = "Session returned by create_session")]
    pub session_id: String,
    #[schemars(
        description = "Tasks to upsert. Existing ids are replaced entirely, new ids are appended"
    )]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetNextPendingTaskParams {
    #[schemars(description = "Session returned by create_session")]
    pub session_id: String,
}
