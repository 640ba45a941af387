//! Session Task MCP Library
//!
//! Session-scoped task lists for agents. Each session holds an ordered list
//! of pending/completed tasks; tools create sessions, add and query tasks,
//! update status, upsert in batches, and fetch the next pending task.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use session_task_mcp::{EmbeddableMcp, SessionTaskMcpServer};
//!
//! let server = SessionTaskMcpServer::new();
//! let result = server
//!     .call_tool("create_session", serde_json::json!({ "initial_tasks": ["Plan"] }))
//!     .await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `session-task-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "session-task": { "command": "./session-task-mcp" } } }
//! ```
//!
//! All state is in memory and lost when the process exits.

pub mod config;
pub mod embeddable;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod params;
pub mod response;
pub mod server;
pub mod session;
pub mod store;
pub mod types;

// Re-export main server type
pub use server::SessionTaskMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{ErrorKind, TaskError, TaskResult};
pub use store::SessionStore;
pub use types::{StatusFilter, Task, TaskStatus};
