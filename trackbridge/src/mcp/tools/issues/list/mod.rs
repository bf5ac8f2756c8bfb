//! Issue listing tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::{connection_json, issue_json};
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListIssuesRequest;
use crate::models::{IssueFilter, Page};

/// Tool for listing issues matching a filter
#[derive(Default)]
pub struct ListIssuesTool;

impl ListIssuesTool {
    /// Creates a new instance of the ListIssuesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListIssuesTool {
    fn name(&self) -> &'static str {
        "issue_list"
    }

    fn description(&self) -> &'static str {
        "List issues, optionally filtered by team, assignee, workflow state, label or project. \
         Cursor-paginated via first/after."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "team_id": {
                    "type": "string",
                    "description": "Restrict to a team"
                },
                "assignee_id": {
                    "type": "string",
                    "description": "Restrict to an assignee"
                },
                "state_id": {
                    "type": "string",
                    "description": "Restrict to a workflow state"
                },
                "label_id": {
                    "type": "string",
                    "description": "Restrict to issues carrying a label"
                },
                "project_id": {
                    "type": "string",
                    "description": "Restrict to a project"
                },
                "first": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 250,
                    "description": "Page size"
                },
                "after": {
                    "type": "string",
                    "description": "Cursor from a previous call"
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListIssuesRequest = BaseToolImpl::parse_arguments(arguments)?;

        let filter = IssueFilter {
            team_id: request.team_id,
            assignee_id: request.assignee_id,
            state_id: request.state_id,
            label_id: request.label_id,
            project_id: request.project_id,
        };
        let page = Page {
            first: request.first,
            after: request.after,
        };

        let connection = McpErrorHandler::handle_result(
            context.tracker.issues(filter, page).await,
            "list issues",
        )?;

        let nodes = connection.nodes.iter().map(issue_json).collect();
        BaseToolImpl::create_json_response(&connection_json(
            "issues",
            nodes,
            &connection.page_info,
        ))
    }
}
