//! Project creation tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::project_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateProjectRequest;
use crate::models::CreateProjectInput;

/// Tool for creating new projects
#[derive(Default)]
pub struct CreateProjectTool;

impl CreateProjectTool {
    /// Creates a new instance of the CreateProjectTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateProjectTool {
    fn name(&self) -> &'static str {
        "project_create"
    }

    fn description(&self) -> &'static str {
        "Create a new project belonging to one or more teams."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Project name"
                },
                "team_ids": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 1,
                    "description": "Teams the project belongs to"
                },
                "description": {
                    "type": "string",
                    "description": "Project description"
                },
                "state": {
                    "type": "string",
                    "description": "Initial lifecycle state (planned, started, paused, completed, canceled)"
                }
            },
            "required": ["name", "team_ids"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateProjectRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.name, "project name")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate project name"))?;
        if request.team_ids.is_empty() {
            return Err(McpError::invalid_params(
                "A project needs at least one team",
                None,
            ));
        }

        tracing::debug!("Creating project '{}'", request.name);

        let input = CreateProjectInput {
            name: request.name,
            team_ids: request.team_ids,
            description: request.description,
            state: request.state,
        };

        match context.tracker.create_project(input).await {
            Ok(project) => {
                tracing::info!("Created project {}", project.name);
                BaseToolImpl::create_json_response(&project_json(&project))
            }
            Err(e) => Err(McpErrorHandler::handle_error(e, "create project")),
        }
    }
}
