//! Issue update tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::issue_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UpdateIssueRequest;
use crate::models::UpdateIssueInput;

/// Tool for updating existing issues
#[derive(Default)]
pub struct UpdateIssueTool;

impl UpdateIssueTool {
    /// Creates a new instance of the UpdateIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateIssueTool {
    fn name(&self) -> &'static str {
        "issue_update"
    }

    fn description(&self) -> &'static str {
        "Update an existing issue. Only the supplied fields change; at least one updatable \
         field is required."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Issue id to update"
                },
                "title": {
                    "type": "string",
                    "description": "New title"
                },
                "description": {
                    "type": "string",
                    "description": "New markdown body"
                },
                "priority": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": 4,
                    "description": "New priority"
                },
                "state_id": {
                    "type": "string",
                    "description": "New workflow state id"
                },
                "assignee_id": {
                    "type": "string",
                    "description": "New assignee user id"
                },
                "label_ids": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Replacement label ids"
                },
                "estimate": {
                    "type": "number",
                    "description": "New point estimate"
                },
                "due_date": {
                    "type": "string",
                    "description": "New due date as YYYY-MM-DD"
                }
            },
            "required": ["id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UpdateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.id, "issue id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate issue id"))?;
        if let Some(priority) = request.priority {
            McpValidation::validate_priority(priority)
                .map_err(|e| McpErrorHandler::handle_error(e, "validate priority"))?;
        }

        let input = UpdateIssueInput {
            title: request.title,
            description: request.description,
            priority: request.priority,
            state_id: request.state_id,
            assignee_id: request.assignee_id,
            label_ids: request.label_ids,
            estimate: request.estimate,
            due_date: request.due_date,
        };
        if input.is_empty() {
            return Err(McpError::invalid_params(
                "No fields to update: supply at least one updatable field",
                None,
            ));
        }

        tracing::debug!("Updating issue {}", request.id);

        match context.tracker.update_issue(&request.id, input).await {
            Ok(issue) => {
                tracing::info!("Updated issue {}", issue.identifier);
                BaseToolImpl::create_json_response(&issue_json(&issue))
            }
            Err(e) => Err(McpErrorHandler::handle_error(e, "update issue")),
        }
    }
}
