//! Team listing tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::{connection_json, team_json};
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListTeamsRequest;
use crate::models::Page;

/// Tool for listing workspace teams
#[derive(Default)]
pub struct ListTeamsTool;

impl ListTeamsTool {
    /// Creates a new instance of the ListTeamsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListTeamsTool {
    fn name(&self) -> &'static str {
        "team_list"
    }

    fn description(&self) -> &'static str {
        "List the workspace's teams. Cursor-paginated via first/after."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
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
        let request: ListTeamsRequest = BaseToolImpl::parse_arguments(arguments)?;
        let page = Page {
            first: request.first,
            after: request.after,
        };

        let connection =
            McpErrorHandler::handle_result(context.tracker.teams(page).await, "list teams")?;

        let nodes = connection.nodes.iter().map(team_json).collect();
        BaseToolImpl::create_json_response(&connection_json("teams", nodes, &connection.page_info))
    }
}
