//! Label creation tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::label_json;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateLabelRequest;
use crate::models::CreateLabelInput;

/// Tool for creating new labels
#[derive(Default)]
pub struct CreateLabelTool;

impl CreateLabelTool {
    /// Creates a new instance of the CreateLabelTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateLabelTool {
    fn name(&self) -> &'static str {
        "label_create"
    }

    fn description(&self) -> &'static str {
        "Create a new issue label in a team, with an optional #rrggbb display color."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "team_id": {
                    "type": "string",
                    "description": "Id of the team the label belongs to"
                },
                "name": {
                    "type": "string",
                    "description": "Label name"
                },
                "color": {
                    "type": "string",
                    "pattern": "^#[0-9a-fA-F]{6}$",
                    "description": "Display color as #rrggbb"
                },
                "description": {
                    "type": "string",
                    "description": "Label description"
                }
            },
            "required": ["team_id", "name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateLabelRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.team_id, "team id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate team id"))?;
        McpValidation::validate_not_empty(&request.name, "label name")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate label name"))?;
        if let Some(color) = &request.color {
            McpValidation::validate_color(color)
                .map_err(|e| McpErrorHandler::handle_error(e, "validate label color"))?;
        }

        let input = CreateLabelInput {
            team_id: request.team_id,
            name: request.name,
            color: request.color,
            description: request.description,
        };

        match context.tracker.create_label(input).await {
            Ok(label) => {
                tracing::info!("Created label {}", label.name);
                BaseToolImpl::create_json_response(&label_json(&label))
            }
            Err(e) => Err(McpErrorHandler::handle_error(e, "create label")),
        }
    }
}
