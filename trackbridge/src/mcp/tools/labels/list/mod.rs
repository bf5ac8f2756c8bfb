//! Label listing tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::{connection_json, label_json};
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListLabelsRequest;
use crate::models::Page;

/// Tool for listing issue labels
#[derive(Default)]
pub struct ListLabelsTool;

impl ListLabelsTool {
    /// Creates a new instance of the ListLabelsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListLabelsTool {
    fn name(&self) -> &'static str {
        "label_list"
    }

    fn description(&self) -> &'static str {
        "List issue labels, optionally restricted to one team. Cursor-paginated via first/after."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "team_id": {
                    "type": "string",
                    "description": "Restrict to a team's labels"
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
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListLabelsRequest = BaseToolImpl::parse_arguments(arguments)?;
        let page = Page {
            first: request.first,
            after: request.after,
        };

        let connection = McpErrorHandler::handle_result(
            context.tracker.labels(request.team_id.as_deref(), page).await,
            "list labels",
        )?;

        let nodes = connection.nodes.iter().map(label_json).collect();
        BaseToolImpl::create_json_response(&connection_json(
            "labels",
            nodes,
            &connection.page_info,
        ))
    }
}
