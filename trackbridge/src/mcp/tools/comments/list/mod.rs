//! Comment listing tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::comment_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListCommentsRequest;

/// Tool for listing an issue's comments
#[derive(Default)]
pub struct ListCommentsTool;

impl ListCommentsTool {
    /// Creates a new instance of the ListCommentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListCommentsTool {
    fn name(&self) -> &'static str {
        "comment_list"
    }

    fn description(&self) -> &'static str {
        "List the comments on an issue, oldest first."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_id": {
                    "type": "string",
                    "description": "Issue whose comments to list"
                }
            },
            "required": ["issue_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListCommentsRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.issue_id, "issue id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate issue id"))?;

        let comments = McpErrorHandler::handle_result(
            context.tracker.issue_comments(&request.issue_id).await,
            "list comments",
        )?;

        let payload = serde_json::json!({
            "comments": comments.iter().map(comment_json).collect::<Vec<_>>(),
            "count": comments.len(),
        });
        BaseToolImpl::create_json_response(&payload)
    }
}
