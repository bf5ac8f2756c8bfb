//! Attachment listing tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::attachment_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListAttachmentsRequest;

/// Tool for listing an issue's attachments
#[derive(Default)]
pub struct ListAttachmentsTool;

impl ListAttachmentsTool {
    /// Creates a new instance of the ListAttachmentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListAttachmentsTool {
    fn name(&self) -> &'static str {
        "attachment_list"
    }

    fn description(&self) -> &'static str {
        "List the URL attachments on an issue."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_id": {
                    "type": "string",
                    "description": "Issue whose attachments to list"
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
        let request: ListAttachmentsRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.issue_id, "issue id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate issue id"))?;

        let attachments = McpErrorHandler::handle_result(
            context.tracker.issue_attachments(&request.issue_id).await,
            "list attachments",
        )?;

        let payload = serde_json::json!({
            "attachments": attachments.iter().map(attachment_json).collect::<Vec<_>>(),
            "count": attachments.len(),
        });
        BaseToolImpl::create_json_response(&payload)
    }
}
