//! Comment creation tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::comment_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateCommentRequest;
use crate::models::CreateCommentInput;

/// Tool for commenting on issues
#[derive(Default)]
pub struct CreateCommentTool;

impl CreateCommentTool {
    /// Creates a new instance of the CreateCommentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateCommentTool {
    fn name(&self) -> &'static str {
        "comment_create"
    }

    fn description(&self) -> &'static str {
        "Add a markdown comment to an issue."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_id": {
                    "type": "string",
                    "description": "Issue to comment on"
                },
                "body": {
                    "type": "string",
                    "description": "Markdown comment body"
                }
            },
            "required": ["issue_id", "body"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateCommentRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.issue_id, "issue id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate issue id"))?;
        McpValidation::validate_not_empty(&request.body, "comment body")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate comment body"))?;

        let input = CreateCommentInput {
            issue_id: request.issue_id,
            body: request.body,
        };

        match context.tracker.create_comment(input).await {
            Ok(comment) => BaseToolImpl::create_json_response(&comment_json(&comment)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "create comment")),
        }
    }
}
