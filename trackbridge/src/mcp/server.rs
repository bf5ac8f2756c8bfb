//! MCP server implementation for serving tracker tools

use std::sync::Arc;

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};

use crate::client::Tracker;

use super::tool_registry::{BaseToolImpl, ToolContext, ToolRegistry};
use super::tools;

const SERVER_INSTRUCTIONS: &str = "An adapter exposing a remote issue tracker over MCP. \
Use issue_* tools to create, update, list, search and link issues, team_*/project_*/label_*/cycle_* \
tools to browse workspace structure, comment_* and attachment_* tools to annotate issues, and \
user_* tools to resolve people. List responses are cursor-paginated via first/after.";

/// MCP server dispatching tool calls to the remote tracker
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing the shared tracker handle
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server around a tracker client with every tool registered
    pub fn new(tracker: Arc<dyn Tracker>) -> Self {
        let mut tool_registry = ToolRegistry::new();
        tools::register_all_tools(&mut tool_registry);

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(tracker)),
        }
    }

    /// Names of all registered tools
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_registry.list_tool_names()
    }

    /// Metadata for every registered tool, as served by list_tools
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_registry.list_tools()
    }

    /// Dispatch one tool call.
    ///
    /// Uniform policy: every failure (unknown tool, bad arguments, remote
    /// failure) surfaces as an error-flagged response, never as a
    /// transport fault.
    pub async fn dispatch_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> CallToolResult {
        let Some(tool) = self.tool_registry.get_tool(name) else {
            return BaseToolImpl::create_error_response(format!("Unknown tool: {name}"), None);
        };

        match tool.execute(arguments, &self.tool_context).await {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!("Tool '{}' failed: {}", name, error.message);
                BaseToolImpl::create_error_response(error.message.to_string(), None)
            }
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability {
                list_changed: Some(false),
            }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            instructions: Some(SERVER_INSTRUCTIONS.into()),
            server_info: Implementation {
                name: "trackbridge".into(),
                version: crate::VERSION.into(),
            },
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self
            .dispatch_tool(&request.name, request.arguments.unwrap_or_default())
            .await)
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "trackbridge".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTracker;

    #[test]
    fn test_server_registers_all_tools() {
        let server = McpServer::new(Arc::new(MockTracker::with_fixtures()));
        let names = server.tool_names();

        for expected in [
            "issue_create",
            "issue_update",
            "issue_get",
            "issue_list",
            "issue_search",
            "issue_set_parent",
            "team_list",
            "team_get",
            "project_list",
            "project_create",
            "project_get",
            "label_list",
            "label_create",
            "cycle_list",
            "cycle_get",
            "comment_create",
            "comment_list",
            "attachment_create",
            "attachment_list",
            "user_list",
            "user_get",
            "user_me",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
        assert_eq!(names.len(), 22);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_is_error_flagged() {
        let server = McpServer::new(Arc::new(MockTracker::with_fixtures()));
        let result = server
            .dispatch_tool("no_such_tool", serde_json::Map::new())
            .await;
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_dispatch_tool_failure_is_error_flagged() {
        let server = McpServer::new(Arc::new(MockTracker::with_fixtures()));
        // issue_get without the required id argument
        let result = server.dispatch_tool("issue_get", serde_json::Map::new()).await;
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_server_info() {
        let server = McpServer::new(Arc::new(MockTracker::with_fixtures()));
        let info = server.get_info();

        assert_eq!(info.server_info.name, "trackbridge");
        assert_eq!(info.server_info.version, crate::VERSION);
        assert!(info.instructions.is_some());
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
    }
}
