//! Detailed user view tool
//!
//! Joins the user record with the first page of their assigned issues.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::user_detail_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetUserRequest;
use crate::models::Page;

/// Tool for fetching one user with their assigned issues
#[derive(Default)]
pub struct GetUserTool;

impl GetUserTool {
    /// Creates a new instance of the GetUserTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetUserTool {
    fn name(&self) -> &'static str {
        "user_get"
    }

    fn description(&self) -> &'static str {
        "Fetch one user as a detailed record with the first page of their assigned issues."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "User id"
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
        let request: GetUserRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.id, "user id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate user id"))?;

        let tracker = context.tracker.as_ref();
        let result = tokio::try_join!(
            tracker.user(&request.id),
            tracker.user_assigned_issues(&request.id, Page::default()),
        );
        let (user, assigned) = McpErrorHandler::handle_result(result, "get user")?;

        BaseToolImpl::create_json_response(&user_detail_json(
            &user,
            &assigned.nodes,
            &assigned.page_info,
        ))
    }
}
