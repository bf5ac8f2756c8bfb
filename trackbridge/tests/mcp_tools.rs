//! Tool contract tests
//!
//! For every tool: omitting a required argument yields an error-flagged
//! response, a successful call returns a JSON object with the documented
//! fields, and referencing a nonexistent entity yields a "not found"
//! error-flagged response. All runs go through the server's dispatch
//! boundary against the seeded mock tracker.

use std::sync::Arc;

use rmcp::model::{CallToolResult, RawContent};
use serde_json::{json, Map, Value};
use trackbridge::client::mock::MockTracker;
use trackbridge::mcp::McpServer;

fn fixture_server() -> McpServer {
    McpServer::new(Arc::new(MockTracker::with_fixtures()))
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("arguments must be an object, got {other}"),
    }
}

fn response_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("expected text content"),
    }
}

fn response_json(result: &CallToolResult) -> Value {
    assert_eq!(result.is_error, Some(false), "tool call failed unexpectedly");
    serde_json::from_str(response_text(result)).expect("success payload must be JSON")
}

async fn call(server: &McpServer, tool: &str, arguments: Value) -> CallToolResult {
    server.dispatch_tool(tool, args(arguments)).await
}

async fn assert_missing_arg_is_error(server: &McpServer, tool: &str) {
    let result = call(server, tool, json!({})).await;
    assert_eq!(
        result.is_error,
        Some(true),
        "{tool} without required arguments must return an error response"
    );
}

async fn assert_not_found(server: &McpServer, tool: &str, arguments: Value) {
    let result = call(server, tool, arguments).await;
    assert_eq!(result.is_error, Some(true), "{tool} must flag unknown ids");
    assert!(
        response_text(&result).contains("not found"),
        "{tool} should report a not-found error, got: {}",
        response_text(&result)
    );
}

fn field_names(value: &Value) -> Vec<&str> {
    let mut names: Vec<&str> = value
        .as_object()
        .expect("payload must be an object")
        .keys()
        .map(|k| k.as_str())
        .collect();
    names.sort_unstable();
    names
}

const ISSUE_SUMMARY_FIELDS: [&str; 18] = [
    "assignee_id",
    "created_at",
    "creator_id",
    "cycle_id",
    "description",
    "due_date",
    "estimate",
    "id",
    "identifier",
    "parent_id",
    "priority",
    "priority_label",
    "project_id",
    "state_id",
    "team_id",
    "title",
    "updated_at",
    "url",
];

#[tokio::test]
async fn missing_required_arguments_yield_error_responses() {
    let server = fixture_server();
    for tool in [
        "issue_create",
        "issue_update",
        "issue_get",
        "issue_search",
        "issue_set_parent",
        "team_get",
        "project_create",
        "project_get",
        "label_create",
        "cycle_list",
        "cycle_get",
        "comment_create",
        "comment_list",
        "attachment_create",
        "attachment_list",
        "user_get",
    ] {
        assert_missing_arg_is_error(&server, tool).await;
    }
}

#[tokio::test]
async fn nonexistent_ids_yield_not_found_responses() {
    let server = fixture_server();
    assert_not_found(&server, "issue_get", json!({ "id": "issue_999" })).await;
    assert_not_found(
        &server,
        "issue_update",
        json!({ "id": "issue_999", "title": "x" }),
    )
    .await;
    assert_not_found(
        &server,
        "issue_create",
        json!({ "team_id": "team_999", "title": "x" }),
    )
    .await;
    assert_not_found(
        &server,
        "issue_set_parent",
        json!({ "id": "issue_2", "parent_id": "issue_999" }),
    )
    .await;
    assert_not_found(&server, "team_get", json!({ "id": "team_999" })).await;
    assert_not_found(&server, "project_get", json!({ "id": "project_999" })).await;
    assert_not_found(&server, "cycle_get", json!({ "id": "cycle_999" })).await;
    assert_not_found(&server, "cycle_list", json!({ "team_id": "team_999" })).await;
    assert_not_found(
        &server,
        "comment_create",
        json!({ "issue_id": "issue_999", "body": "x" }),
    )
    .await;
    assert_not_found(&server, "comment_list", json!({ "issue_id": "issue_999" })).await;
    assert_not_found(
        &server,
        "attachment_create",
        json!({ "issue_id": "issue_999", "url": "https://x", "title": "x" }),
    )
    .await;
    assert_not_found(&server, "user_get", json!({ "id": "user_999" })).await;
}

#[tokio::test]
async fn issue_create_returns_summary_fields() {
    let server = fixture_server();
    let result = call(
        &server,
        "issue_create",
        json!({
            "team_id": "team_eng",
            "title": "New from test",
            "priority": 1,
            "assignee_id": "user_bob"
        }),
    )
    .await;

    let payload = response_json(&result);
    assert_eq!(field_names(&payload), ISSUE_SUMMARY_FIELDS);
    assert_eq!(payload["identifier"], "ENG-3");
    assert_eq!(payload["priority"], 1);
    assert_eq!(payload["assignee_id"], "user_bob");
    assert_eq!(payload["team_id"], "team_eng");
}

#[tokio::test]
async fn issue_create_rejects_out_of_range_priority() {
    let server = fixture_server();
    let result = call(
        &server,
        "issue_create",
        json!({ "team_id": "team_eng", "title": "x", "priority": 9 }),
    )
    .await;
    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn issue_create_rejects_empty_title() {
    let server = fixture_server();
    let result = call(
        &server,
        "issue_create",
        json!({ "team_id": "team_eng", "title": "   " }),
    )
    .await;
    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn issue_update_changes_only_supplied_fields() {
    let server = fixture_server();
    let result = call(
        &server,
        "issue_update",
        json!({ "id": "issue_1", "priority": 4 }),
    )
    .await;

    let payload = response_json(&result);
    assert_eq!(payload["priority"], 4);
    // untouched fields survive
    assert_eq!(payload["title"], "Login sessions expire too early");
    assert_eq!(payload["state_id"], "state_started");
}

#[tokio::test]
async fn issue_update_with_no_fields_is_rejected() {
    let server = fixture_server();
    let result = call(&server, "issue_update", json!({ "id": "issue_1" })).await;
    assert_eq!(result.is_error, Some(true));
    assert!(response_text(&result).contains("No fields to update"));
}

#[tokio::test]
async fn issue_get_merges_resolved_relations() {
    let server = fixture_server();
    let result = call(&server, "issue_get", json!({ "id": "issue_1" })).await;

    let payload = response_json(&result);
    assert_eq!(payload["identifier"], "ENG-1");
    assert_eq!(payload["state"]["name"], "In Progress");
    assert_eq!(payload["state"]["type"], "started");
    assert_eq!(payload["assignee"]["email"], "alice@example.com");
    assert_eq!(payload["creator"]["email"], "bob@example.com");
    assert_eq!(payload["team"]["key"], "ENG");
    assert_eq!(payload["project"]["name"], "Apollo");
    assert_eq!(payload["cycle"]["number"], 4);
    assert_eq!(payload["parent"], Value::Null);
    assert_eq!(payload["labels"][0]["name"], "Bug");
    assert_eq!(payload["comments"][0]["body"], "Reproduced on staging.");
    assert_eq!(payload["attachments"][0]["title"], "Session trace");
}

#[tokio::test]
async fn issue_get_resolves_parent_of_sub_issue() {
    let server = fixture_server();
    let result = call(&server, "issue_get", json!({ "id": "issue_2" })).await;

    let payload = response_json(&result);
    assert_eq!(payload["parent"]["identifier"], "ENG-1");
    assert_eq!(payload["assignee"], Value::Null);
    assert_eq!(payload["labels"], json!([]));
}

#[tokio::test]
async fn issue_list_returns_connection_shape() {
    let server = fixture_server();
    let result = call(&server, "issue_list", json!({})).await;

    let payload = response_json(&result);
    assert_eq!(
        field_names(&payload),
        vec!["count", "end_cursor", "has_next_page", "issues"]
    );
    assert_eq!(payload["count"], 2);
    let first = &payload["issues"][0];
    assert_eq!(field_names(first), ISSUE_SUMMARY_FIELDS);
}

#[tokio::test]
async fn issue_list_filters_by_state() {
    let server = fixture_server();
    let result = call(
        &server,
        "issue_list",
        json!({ "state_id": "state_backlog" }),
    )
    .await;

    let payload = response_json(&result);
    assert_eq!(payload["count"], 1);
    assert_eq!(payload["issues"][0]["identifier"], "ENG-2");
}

#[tokio::test]
async fn issue_list_paginates_with_cursor() {
    let server = fixture_server();
    let first_page = response_json(&call(&server, "issue_list", json!({ "first": 1 })).await);
    assert_eq!(first_page["count"], 1);
    assert_eq!(first_page["has_next_page"], true);

    let cursor = first_page["end_cursor"].as_str().unwrap();
    let second_page = response_json(
        &call(
            &server,
            "issue_list",
            json!({ "first": 1, "after": cursor }),
        )
        .await,
    );
    assert_eq!(second_page["has_next_page"], false);
    assert_ne!(first_page["issues"][0]["id"], second_page["issues"][0]["id"]);
}

#[tokio::test]
async fn issue_search_matches_description_text() {
    let server = fixture_server();
    let result = call(&server, "issue_search", json!({ "query": "logged out" })).await;

    let payload = response_json(&result);
    assert_eq!(payload["count"], 1);
    assert_eq!(payload["issues"][0]["identifier"], "ENG-1");
}

#[tokio::test]
async fn issue_set_parent_detaches_when_parent_omitted() {
    let server = fixture_server();
    let result = call(&server, "issue_set_parent", json!({ "id": "issue_2" })).await;

    let payload = response_json(&result);
    assert_eq!(payload["parent_id"], Value::Null);
}

#[tokio::test]
async fn issue_set_parent_rejects_self_parenting() {
    let server = fixture_server();
    let result = call(
        &server,
        "issue_set_parent",
        json!({ "id": "issue_1", "parent_id": "issue_1" }),
    )
    .await;
    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn team_list_and_get() {
    let server = fixture_server();
    let listed = response_json(&call(&server, "team_list", json!({})).await);
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["teams"][0]["key"], "ENG");

    let detail = response_json(&call(&server, "team_get", json!({ "id": "team_eng" })).await);
    assert_eq!(detail["key"], "ENG");
    assert_eq!(detail["states"].as_array().unwrap().len(), 3);
    assert_eq!(detail["states"][0]["name"], "Backlog");
    assert_eq!(detail["members"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn project_create_list_get() {
    let server = fixture_server();
    let created = response_json(
        &call(
            &server,
            "project_create",
            json!({ "name": "Bifrost", "team_ids": ["team_eng"] }),
        )
        .await,
    );
    assert_eq!(created["name"], "Bifrost");
    assert_eq!(created["state"], "planned");

    let listed = response_json(&call(&server, "project_list", json!({})).await);
    assert_eq!(listed["count"], 2);

    let detail = response_json(
        &call(&server, "project_get", json!({ "id": "project_apollo" })).await,
    );
    assert_eq!(detail["lead"]["email"], "alice@example.com");
    assert_eq!(detail["teams"][0]["key"], "ENG");
}

#[tokio::test]
async fn project_create_requires_a_team() {
    let server = fixture_server();
    let result = call(
        &server,
        "project_create",
        json!({ "name": "Empty", "team_ids": [] }),
    )
    .await;
    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn label_list_and_create() {
    let server = fixture_server();
    let listed = response_json(&call(&server, "label_list", json!({})).await);
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["labels"][0]["name"], "Bug");

    let created = response_json(
        &call(
            &server,
            "label_create",
            json!({ "team_id": "team_eng", "name": "Perf", "color": "#00ff00" }),
        )
        .await,
    );
    assert_eq!(created["name"], "Perf");
    assert_eq!(created["color"], "#00ff00");
    assert_eq!(created["team_id"], "team_eng");
}

#[tokio::test]
async fn label_create_rejects_bad_color() {
    let server = fixture_server();
    let result = call(
        &server,
        "label_create",
        json!({ "team_id": "team_eng", "name": "Bad", "color": "green" }),
    )
    .await;
    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn cycle_list_and_get() {
    let server = fixture_server();
    let listed = response_json(&call(&server, "cycle_list", json!({ "team_id": "team_eng" })).await);
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["cycles"][0]["number"], 4);

    let detail = response_json(&call(&server, "cycle_get", json!({ "id": "cycle_4" })).await);
    assert_eq!(detail["team"]["key"], "ENG");
    assert_eq!(detail["issue_count"], 1);
    assert_eq!(detail["issues"][0]["identifier"], "ENG-1");
}

#[tokio::test]
async fn comment_create_and_list() {
    let server = fixture_server();
    let created = response_json(
        &call(
            &server,
            "comment_create",
            json!({ "issue_id": "issue_1", "body": "From the test" }),
        )
        .await,
    );
    assert_eq!(created["body"], "From the test");
    assert_eq!(created["user_id"], "user_alice");

    let listed = response_json(&call(&server, "comment_list", json!({ "issue_id": "issue_1" })).await);
    assert_eq!(listed["count"], 2);
    assert_eq!(listed["comments"][0]["body"], "Reproduced on staging.");
}

#[tokio::test]
async fn attachment_create_and_list() {
    let server = fixture_server();
    let created = response_json(
        &call(
            &server,
            "attachment_create",
            json!({
                "issue_id": "issue_2",
                "url": "https://docs.example/design",
                "title": "Design doc"
            }),
        )
        .await,
    );
    assert_eq!(created["title"], "Design doc");
    assert_eq!(created["subtitle"], Value::Null);

    let listed = response_json(
        &call(&server, "attachment_list", json!({ "issue_id": "issue_2" })).await,
    );
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["attachments"][0]["url"], "https://docs.example/design");
}

#[tokio::test]
async fn user_list_get_and_me() {
    let server = fixture_server();
    let listed = response_json(&call(&server, "user_list", json!({})).await);
    assert_eq!(listed["count"], 2);

    let detail = response_json(&call(&server, "user_get", json!({ "id": "user_alice" })).await);
    assert_eq!(detail["email"], "alice@example.com");
    assert_eq!(detail["assigned_count"], 1);
    assert_eq!(detail["assigned_issues"][0]["identifier"], "ENG-1");
    assert_eq!(detail["has_more_assigned"], false);

    let me = response_json(&call(&server, "user_me", json!({})).await);
    assert_eq!(me["id"], "user_alice");
    assert_eq!(me["admin"], true);
}

#[tokio::test]
async fn remote_failures_are_error_flagged_not_faults() {
    let tracker = Arc::new(MockTracker::with_fixtures());
    let server = McpServer::new(tracker.clone());

    tracker.fail_reads(true).await;
    let read = call(&server, "issue_get", json!({ "id": "issue_1" })).await;
    assert_eq!(read.is_error, Some(true));
    assert!(response_text(&read).contains("simulated read failure"));

    tracker.fail_reads(false).await;
    tracker.fail_mutations(true).await;
    let write = call(
        &server,
        "issue_create",
        json!({ "team_id": "team_eng", "title": "x" }),
    )
    .await;
    assert_eq!(write.is_error, Some(true));
}

#[tokio::test]
async fn every_tool_lists_a_schema() {
    let server = fixture_server();
    assert_eq!(server.tool_names().len(), 22);
}
