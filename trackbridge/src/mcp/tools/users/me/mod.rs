//! Viewer identity tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::responses::user_json;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::MeRequest;

/// Tool returning the user the API key authenticates as
#[derive(Default)]
pub struct MeTool;

impl MeTool {
    /// Creates a new instance of the MeTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for MeTool {
    fn name(&self) -> &'static str {
        "user_me"
    }

    fn description(&self) -> &'static str {
        "Fetch the user the configured API key authenticates as."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let _request: MeRequest = BaseToolImpl::parse_arguments(arguments)?;

        let viewer =
            McpErrorHandler::handle_result(context.tracker.viewer().await, "get viewer")?;
        BaseToolImpl::create_json_response(&user_json(&viewer))
    }
}
