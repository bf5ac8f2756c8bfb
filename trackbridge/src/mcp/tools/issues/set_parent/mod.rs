//! Sub-issue linking tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::issue_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SetIssueParentRequest;

/// Tool for linking an issue under a parent, or detaching it
#[derive(Default)]
pub struct SetIssueParentTool;

impl SetIssueParentTool {
    /// Creates a new instance of the SetIssueParentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SetIssueParentTool {
    fn name(&self) -> &'static str {
        "issue_set_parent"
    }

    fn description(&self) -> &'static str {
        "Make an issue a sub-issue of another by setting its parent. \
         Omit parent_id to detach the issue from its current parent."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Issue id to re-parent"
                },
                "parent_id": {
                    "type": "string",
                    "description": "New parent issue id; omit to detach"
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
        let request: SetIssueParentRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.id, "issue id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate issue id"))?;
        if request.parent_id.as_deref() == Some(request.id.as_str()) {
            return Err(McpError::invalid_params(
                "An issue cannot be its own parent",
                None,
            ));
        }

        tracing::debug!(
            "Setting parent of {} to {:?}",
            request.id,
            request.parent_id
        );

        match context
            .tracker
            .set_issue_parent(&request.id, request.parent_id.as_deref())
            .await
        {
            Ok(issue) => BaseToolImpl::create_json_response(&issue_json(&issue)),
            Err(e) => Err(McpErrorHandler::handle_error(e, "set issue parent")),
        }
    }
}
