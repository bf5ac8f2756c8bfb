//! Detailed project view tool
//!
//! Joins the project record with its lead and member teams, fetched
//! concurrently.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::client::Tracker;
use crate::error::Result;
use crate::mcp::responses::project_detail_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetProjectRequest;
use crate::models::{EntityRef, User};

/// Tool for fetching one project with lead and teams
#[derive(Default)]
pub struct GetProjectTool;

impl GetProjectTool {
    /// Creates a new instance of the GetProjectTool
    pub fn new() -> Self {
        Self
    }
}

async fn maybe_lead(tracker: &dyn Tracker, edge: Option<&EntityRef>) -> Result<Option<User>> {
    match edge {
        Some(edge) => tracker.user(&edge.id).await.map(Some),
        None => Ok(None),
    }
}

#[async_trait]
impl McpTool for GetProjectTool {
    fn name(&self) -> &'static str {
        "project_get"
    }

    fn description(&self) -> &'static str {
        "Fetch one project as a detailed record with its lead and member teams resolved."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Project id"
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
        let request: GetProjectRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.id, "project id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate project id"))?;

        let tracker = context.tracker.as_ref();
        let project =
            McpErrorHandler::handle_result(tracker.project(&request.id).await, "get project")?;

        let result = tokio::try_join!(
            maybe_lead(tracker, project.lead.as_ref()),
            tracker.project_teams(&project.id),
        );
        let (lead, teams) =
            McpErrorHandler::handle_result(result, "resolve project relations")?;

        BaseToolImpl::create_json_response(&project_detail_json(&project, lead.as_ref(), &teams))
    }
}
