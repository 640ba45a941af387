//! Session Task MCP - session-scoped task lists over stdio

use clap::Parser;
use rmcp::{transport::io::stdio, ServiceExt};
use session_task_mcp::{config::ServerArgs, logging, SessionTaskMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    logging::init_tracing(args.log_format, &args.log_level)?;

    tracing::info!("Starting Session Task MCP server");

    let server = SessionTaskMcpServer::new();
    let store = server.store().clone();
    let service = server.serve(stdio()).await?;

    tracing::info!("Session Task MCP server running");

    service.waiting().await?;

    tracing::info!(sessions = store.session_count(), "Session Task MCP server stopped");

    Ok(())
}
