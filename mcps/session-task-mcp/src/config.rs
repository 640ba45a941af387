//! Command-line and environment configuration

use clap::{Parser, ValueEnum};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines without ANSI colours
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Session Task MCP server
#[derive(Debug, Clone, Parser)]
#[command(name = "session-task-mcp", version, about)]
pub struct ServerArgs {
    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, ignore_case = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Default log level for this crate; RUST_LOG directives still apply
    #[arg(long, env = "SESSION_TASK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
