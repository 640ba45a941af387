//! Type definitions for session-task-mcp

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status filter for task listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Pending,
    Completed,
    #[default]
    All,
}

impl StatusFilter {
    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == TaskStatus::Pending,
            StatusFilter::Completed => status == TaskStatus::Completed,
        }
    }
}

/// A unit of work inside a session.
///
/// Values handed out by the store are snapshots; mutating one does not
/// touch the session it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Task {
    /// Identifier, unique within the owning session
    pub id: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn pending(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            status: TaskStatus::Pending,
        }
    }
}

/// Response for session creation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub tasks: Vec<Task>,
}

/// Response for single task creation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddTaskResponse {
    pub added_task: Task,
}

/// Response for task list operations
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    pub total: usize,
}

/// Response for status updates
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateStatusResponse {
    pub updated_task: Task,
    pub tasks: Vec<Task>,
}

/// Response for batch upserts, sorted by numeric id
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTasksResponse {
    pub tasks: Vec<Task>,
}

/// Response for next pending task selection
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NextTaskResponse {
    pub next_task: Option<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Option<Task>> for NextTaskResponse {
    fn from(next_task: Option<Task>) -> Self {
        let message = match next_task {
            Some(_) => None,
            None => Some("No pending tasks".to_string()),
        };
        Self { next_task, message }
    }
}
