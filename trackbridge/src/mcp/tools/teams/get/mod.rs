//! Detailed team view tool
//!
//! Joins the team record with its workflow states and members, fetched
//! concurrently.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::team_detail_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetTeamRequest;

/// Tool for fetching one team with states and members
#[derive(Default)]
pub struct GetTeamTool;

impl GetTeamTool {
    /// Creates a new instance of the GetTeamTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetTeamTool {
    fn name(&self) -> &'static str {
        "team_get"
    }

    fn description(&self) -> &'static str {
        "Fetch one team as a detailed record with its workflow states and members resolved."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Team id"
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
        let request: GetTeamRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.id, "team id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate team id"))?;

        let tracker = context.tracker.as_ref();
        let result = tokio::try_join!(
            tracker.team(&request.id),
            tracker.team_states(&request.id),
            tracker.team_members(&request.id),
        );
        let (team, states, members) = McpErrorHandler::handle_result(result, "get team")?;

        BaseToolImpl::create_json_response(&team_detail_json(&team, &states, &members))
    }
}
