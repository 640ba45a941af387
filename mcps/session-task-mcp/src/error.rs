//! Error taxonomy for session and task operations
//!
//! Only two kinds of failure exist: validation (bad input) and not-found
//! (unknown session or task id). Both are returned to the caller as
//! structured MCP errors; neither ends the process.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Coarse classification of a [`TaskError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("task {task_id} not found in session {session_id}")]
    TaskNotFound { session_id: String, task_id: String },
}

impl TaskError {
    pub fn validation(message: impl Into<String>) -> Self {
        TaskError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::Validation(_) => ErrorKind::Validation,
            TaskError::SessionNotFound(_) | TaskError::TaskNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

pub type TaskResult<T> = Result<T, TaskError>;

impl From<TaskError> for McpError {
    fn from(err: TaskError) -> Self {
        match err.kind() {
            ErrorKind::Validation => McpError::invalid_params(err.to_string(), None),
            ErrorKind::NotFound => McpError::resource_not_found(err.to_string(), None),
        }
    }
}
