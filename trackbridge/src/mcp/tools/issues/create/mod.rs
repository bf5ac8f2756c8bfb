//! Issue creation tool
//!
//! Maps the issue_create input schema onto the tracker's create mutation
//! and projects the created issue back as a summary record.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::issue_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateIssueRequest;
use crate::models::CreateIssueInput;

/// Tool for creating new issues
#[derive(Default)]
pub struct CreateIssueTool;

impl CreateIssueTool {
    /// Creates a new instance of the CreateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateIssueTool {
    fn name(&self) -> &'static str {
        "issue_create"
    }

    fn description(&self) -> &'static str {
        "Create a new issue in a team. Supports priority, workflow state, assignee, labels, \
         a parent issue (making this a sub-issue), estimate and due date."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "team_id": {
                    "type": "string",
                    "description": "Id of the team the issue belongs to"
                },
                "title": {
                    "type": "string",
                    "description": "Issue title"
                },
                "description": {
                    "type": "string",
                    "description": "Markdown body"
                },
                "priority": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": 4,
                    "description": "Priority: 0 none, 1 urgent, 2 high, 3 normal, 4 low"
                },
                "state_id": {
                    "type": "string",
                    "description": "Workflow state id"
                },
                "assignee_id": {
                    "type": "string",
                    "description": "Assignee user id"
                },
                "label_ids": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Label ids to apply"
                },
                "parent_id": {
                    "type": "string",
                    "description": "Parent issue id; creates a sub-issue"
                },
                "estimate": {
                    "type": "number",
                    "description": "Point estimate"
                },
                "due_date": {
                    "type": "string",
                    "description": "Due date as YYYY-MM-DD"
                }
            },
            "required": ["team_id", "title"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.team_id, "team id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate team id"))?;
        McpValidation::validate_not_empty(&request.title, "issue title")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate issue title"))?;
        if let Some(priority) = request.priority {
            McpValidation::validate_priority(priority)
                .map_err(|e| McpErrorHandler::handle_error(e, "validate priority"))?;
        }

        tracing::debug!("Creating issue '{}' in {}", request.title, request.team_id);

        let input = CreateIssueInput {
            team_id: request.team_id,
            title: request.title,
            description: request.description,
            priority: request.priority,
            state_id: request.state_id,
            assignee_id: request.assignee_id,
            label_ids: request.label_ids,
            parent_id: request.parent_id,
            estimate: request.estimate,
            due_date: request.due_date,
        };

        match context.tracker.create_issue(input).await {
            Ok(issue) => {
                tracing::info!("Created issue {}", issue.identifier);
                BaseToolImpl::create_json_response(&issue_json(&issue))
            }
            Err(e) => Err(McpErrorHandler::handle_error(e, "create issue")),
        }
    }
}
