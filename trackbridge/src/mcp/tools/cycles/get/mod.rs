//! Detailed cycle view tool
//!
//! Joins the cycle record with its team and scheduled issues, fetched
//! concurrently.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::cycle_detail_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetCycleRequest;

/// Tool for fetching one cycle with its team and issues
#[derive(Default)]
pub struct GetCycleTool;

impl GetCycleTool {
    /// Creates a new instance of the GetCycleTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetCycleTool {
    fn name(&self) -> &'static str {
        "cycle_get"
    }

    fn description(&self) -> &'static str {
        "Fetch one cycle as a detailed record with its team and scheduled issues resolved."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Cycle id"
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
        let request: GetCycleRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.id, "cycle id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate cycle id"))?;

        let tracker = context.tracker.as_ref();
        let cycle = McpErrorHandler::handle_result(tracker.cycle(&request.id).await, "get cycle")?;

        let result = tokio::try_join!(tracker.team(&cycle.team.id), tracker.cycle_issues(&cycle.id));
        let (team, issues) = McpErrorHandler::handle_result(result, "resolve cycle relations")?;

        BaseToolImpl::create_json_response(&cycle_detail_json(&cycle, &team, &issues))
    }
}
