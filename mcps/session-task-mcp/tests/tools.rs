//! End-to-end tests through the in-process tool surface
//!
//! These drive `SessionTaskMcpServer` the way an MCP client would: tool name
//! plus JSON arguments in, JSON text content out.

use serde_json::{json, Value};
use session_task_mcp::{EmbeddableError, EmbeddableMcp, SessionTaskMcpServer};

/// Call a tool that must succeed and decode its JSON payload
async fn call_ok(server: &SessionTaskMcpServer, name: &str, params: Value) -> Value {
    let result = server
        .call_tool(name, params)
        .await
        .unwrap_or_else(|e| panic!("{} failed: {}", name, e));
    assert!(!result.is_error.unwrap_or(false));
    let text = &result.content[0].as_text().expect("text content").text;
    serde_json::from_str(text).expect("valid JSON payload")
}

async fn new_session(server: &SessionTaskMcpServer, tasks: &[&str]) -> String {
    let created = call_ok(server, "create_session", json!({ "initial_tasks": tasks })).await;
    created["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn weather_app_walkthrough() {
    let server = SessionTaskMcpServer::new();

    let created = call_ok(
        &server,
        "create_session",
        json!({ "initial_tasks": ["Create a weather app", "Write tests for the app"] }),
    )
    .await;
    assert_eq!(
        created["tasks"],
        json!([
            { "id": "1", "description": "Create a weather app", "status": "pending" },
            { "id": "2", "description": "Write tests for the app", "status": "pending" }
        ])
    );
    let session_id = created["session_id"].as_str().unwrap();

    let updated = call_ok(
        &server,
        "update_task_status",
        json!({ "session_id": session_id, "task_id": "1", "status": "completed" }),
    )
    .await;
    assert_eq!(
        updated["updated_task"],
        json!({ "id": "1", "description": "Create a weather app", "status": "completed" })
    );
    assert_eq!(updated["tasks"][0]["status"], "completed");
    assert_eq!(updated["tasks"][1]["status"], "pending");

    let next = call_ok(
        &server,
        "get_next_pending_task",
        json!({ "session_id": session_id }),
    )
    .await;
    assert_eq!(next["next_task"]["id"], "2");
    assert!(next.get("message").is_none());
}

#[tokio::test]
async fn add_then_filter_tasks() {
    let server = SessionTaskMcpServer::new();
    let session_id = new_session(&server, &["design"]).await;

    let added = call_ok(
        &server,
        "add_task",
        json!({ "session_id": session_id, "description": "build" }),
    )
    .await;
    assert_eq!(
        added["added_task"],
        json!({ "id": "2", "description": "build", "status": "pending" })
    );

    call_ok(
        &server,
        "update_task_status",
        json!({ "session_id": session_id, "task_id": "1", "status": "completed" }),
    )
    .await;

    let completed = call_ok(
        &server,
        "get_tasks",
        json!({ "session_id": session_id, "status": "completed" }),
    )
    .await;
    assert_eq!(completed["total"], 1);
    assert_eq!(completed["tasks"][0]["id"], "1");

    let single = call_ok(
        &server,
        "get_tasks",
        json!({ "session_id": session_id, "task_id": "2" }),
    )
    .await;
    assert_eq!(single["tasks"], json!([added["added_task"].clone()]));

    let none = call_ok(
        &server,
        "get_tasks",
        json!({ "session_id": session_id, "task_id": "42" }),
    )
    .await;
    assert_eq!(none["tasks"], json!([]));
    assert_eq!(none["total"], 0);
}

#[tokio::test]
async fn batch_upsert_sorts_by_numeric_id() {
    let server = SessionTaskMcpServer::new();
    let session_id = new_session(&server, &["a", "b"]).await;

    let upserted = call_ok(
        &server,
        "update_tasks",
        json!({
            "session_id": session_id,
            "tasks": [
                { "id": "10", "description": "ten", "status": "pending" },
                { "id": "1", "description": "a, done", "status": "completed" },
                { "id": "3", "description": "three", "status": "pending" }
            ]
        }),
    )
    .await;
    let ids: Vec<&str> = upserted["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "10"]);
    assert_eq!(upserted["tasks"][0]["description"], "a, done");

    let added = call_ok(
        &server,
        "add_task",
        json!({ "session_id": session_id, "description": "after" }),
    )
    .await;
    assert_eq!(added["added_task"]["id"], "11");
}

#[tokio::test]
async fn no_pending_task_is_not_an_error() {
    let server = SessionTaskMcpServer::new();
    let session_id = new_session(&server, &["only"]).await;

    call_ok(
        &server,
        "update_task_status",
        json!({ "session_id": session_id, "task_id": "1", "status": "completed" }),
    )
    .await;

    let next = call_ok(
        &server,
        "get_next_pending_task",
        json!({ "session_id": session_id }),
    )
    .await;
    assert!(next["next_task"].is_null());
    assert_eq!(next["message"], "No pending tasks");
}

#[tokio::test]
async fn unknown_session_fails_for_every_tool() {
    let server = SessionTaskMcpServer::new();
    let calls = [
        ("add_task", json!({ "session_id": "ghost", "description": "x" })),
        ("get_tasks", json!({ "session_id": "ghost" })),
        (
            "update_task_status",
            json!({ "session_id": "ghost", "task_id": "1", "status": "pending" }),
        ),
        ("update_tasks", json!({ "session_id": "ghost", "tasks": [] })),
        ("get_next_pending_task", json!({ "session_id": "ghost" })),
    ];

    for (name, params) in calls {
        match server.call_tool(name, params).await {
            Err(EmbeddableError::McpError(err)) => {
                assert!(err.message.contains("ghost"), "{}: {}", name, err.message)
            }
            other => panic!("{}: expected not found, got {:?}", name, other),
        }
    }
    assert_eq!(server.store().session_count(), 0);
}

#[tokio::test]
async fn missing_task_reports_task_id() {
    let server = SessionTaskMcpServer::new();
    let session_id = new_session(&server, &["a"]).await;

    let result = server
        .call_tool(
            "update_task_status",
            json!({ "session_id": session_id, "task_id": "5", "status": "completed" }),
        )
        .await;
    match result {
        Err(EmbeddableError::McpError(err)) => assert!(err.message.contains("task 5")),
        other => panic!("expected task not found, got {:?}", other),
    }
}

#[tokio::test]
async fn sessions_do_not_share_state() {
    let server = SessionTaskMcpServer::new();
    let first = new_session(&server, &["a"]).await;
    let second = new_session(&server, &["b"]).await;
    assert_ne!(first, second);

    call_ok(
        &server,
        "add_task",
        json!({ "session_id": first, "description": "a2" }),
    )
    .await;

    let listed = call_ok(&server, "get_tasks", json!({ "session_id": second })).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["tasks"][0]["description"], "b");
}
