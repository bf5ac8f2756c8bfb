//! Cycle listing tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::{connection_json, cycle_json};
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListCyclesRequest;
use crate::models::Page;

/// Tool for listing a team's cycles
#[derive(Default)]
pub struct ListCyclesTool;

impl ListCyclesTool {
    /// Creates a new instance of the ListCyclesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListCyclesTool {
    fn name(&self) -> &'static str {
        "cycle_list"
    }

    fn description(&self) -> &'static str {
        "List a team's cycles (time-boxed iterations). Cursor-paginated via first/after."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "team_id": {
                    "type": "string",
                    "description": "Team whose cycles to list"
                },
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
            "required": ["team_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListCyclesRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.team_id, "team id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate team id"))?;

        let page = Page {
            first: request.first,
            after: request.after,
        };

        let connection = McpErrorHandler::handle_result(
            context.tracker.cycles(&request.team_id, page).await,
            "list cycles",
        )?;

        let nodes = connection.nodes.iter().map(cycle_json).collect();
        BaseToolImpl::create_json_response(&connection_json(
            "cycles",
            nodes,
            &connection.page_info,
        ))
    }
}
