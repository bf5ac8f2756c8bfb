//! Issue text search tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::{connection_json, issue_json};
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchIssuesRequest;
use crate::models::Page;

/// Tool for searching issues by free text
#[derive(Default)]
pub struct SearchIssuesTool;

impl SearchIssuesTool {
    /// Creates a new instance of the SearchIssuesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchIssuesTool {
    fn name(&self) -> &'static str {
        "issue_search"
    }

    fn description(&self) -> &'static str {
        "Search issues by free text matched against title and description. \
         Cursor-paginated via first/after."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text query"
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
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchIssuesRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.query, "search query")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate search query"))?;

        let page = Page {
            first: request.first,
            after: request.after,
        };

        let connection = McpErrorHandler::handle_result(
            context.tracker.search_issues(&request.query, page).await,
            "search issues",
        )?;

        let nodes = connection.nodes.iter().map(issue_json).collect();
        BaseToolImpl::create_json_response(&connection_json(
            "issues",
            nodes,
            &connection.page_info,
        ))
    }
}
