//! Project listing tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::{connection_json, project_json};
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListProjectsRequest;
use crate::models::Page;

/// Tool for listing projects
#[derive(Default)]
pub struct ListProjectsTool;

impl ListProjectsTool {
    /// Creates a new instance of the ListProjectsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListProjectsTool {
    fn name(&self) -> &'static str {
        "project_list"
    }

    fn description(&self) -> &'static str {
        "List the workspace's projects. Cursor-paginated via first/after."
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
        let request: ListProjectsRequest = BaseToolImpl::parse_arguments(arguments)?;
        let page = Page {
            first: request.first,
            after: request.after,
        };

        let connection =
            McpErrorHandler::handle_result(context.tracker.projects(page).await, "list projects")?;

        let nodes = connection.nodes.iter().map(project_json).collect();
        BaseToolImpl::create_json_response(&connection_json(
            "projects",
            nodes,
            &connection.page_info,
        ))
    }
}
