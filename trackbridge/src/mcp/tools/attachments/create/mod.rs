//! Attachment creation tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::attachment_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateAttachmentRequest;
use crate::models::CreateAttachmentInput;

/// Tool for attaching URLs to issues
#[derive(Default)]
pub struct CreateAttachmentTool;

impl CreateAttachmentTool {
    /// Creates a new instance of the CreateAttachmentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateAttachmentTool {
    fn name(&self) -> &'static str {
        "attachment_create"
    }

    fn description(&self) -> &'static str {
        "Attach a URL to an issue with a display title and optional subtitle."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issue_id": {
                    "type": "string",
                    "description": "Issue to attach to"
                },
                "url": {
                    "type": "string",
                    "description": "URL to attach"
                },
                "title": {
                    "type": "string",
                    "description": "Display title"
                },
                "subtitle": {
                    "type": "string",
                    "description": "Secondary line shown under the title"
                }
            },
            "required": ["issue_id", "url", "title"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateAttachmentRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.issue_id, "issue id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate issue id"))?;
        McpValidation::validate_not_empty(&request.url, "attachment url")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate attachment url"))?;
        McpValidation::validate_not_empty(&request.title, "attachment title")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate attachment title"))?;

        let input = CreateAttachmentInput {
            issue_id: request.issue_id,
            url: request.url,
            title: request.title,
            subtitle: request.subtitle,
        };

        match context.tracker.create_attachment(input).await {
            Ok(attachment) => BaseToolImpl::create_json_response(&attachment_json(&attachment)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "create attachment")),
        }
    }
}
