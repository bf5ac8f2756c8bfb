//! Tool registry for MCP operations
//!
//! The registry is the dispatch table of the adapter: tool names map to
//! handler objects, each a direct mapping from an input schema to one
//! remote call plus field projection.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::Error as McpError;

use crate::client::Tracker;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// Handle to the remote tracker client
    pub tracker: Arc<dyn Tracker>,
}

impl ToolContext {
    /// Create a new tool context around a tracker client
    pub fn new(tracker: Arc<dyn Tracker>) -> Self {
        Self { tracker }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names
    pub fn list_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tools as Tool objects for the list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed request struct
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response carrying plain text
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Create a success response carrying a JSON payload
    pub fn create_json_response(
        payload: &serde_json::Value,
    ) -> std::result::Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(payload)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {e}"), None))?;
        Ok(Self::create_success_response(text))
    }

    /// Create an error-flagged response with the given message
    pub fn create_error_response<T: Into<String>>(
        error: T,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent { text: error_text }),
                None,
            )],
            is_error: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    /// Mock tool for testing
    struct MockTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
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
            _arguments: serde_json::Map<String, serde_json::Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(BaseToolImpl::create_success_response(format!(
                "tool {} executed",
                self.name
            )))
        }
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_tool_registration_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "test_tool",
            description: "A test tool",
        });

        assert_eq!(registry.len(), 1);
        let tool = registry.get_tool("test_tool").unwrap();
        assert_eq!(tool.name(), "test_tool");
        assert_eq!(tool.description(), "A test tool");
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_list_tool_names_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "b_tool",
            description: "b",
        });
        registry.register(MockTool {
            name: "a_tool",
            description: "a",
        });

        assert_eq!(registry.list_tool_names(), vec!["a_tool", "b_tool"]);
    }

    #[test]
    fn test_list_tools_projection() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "test_tool",
            description: "A test tool",
        });

        let tools = registry.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "test_tool");
        assert!(tools[0].input_schema.contains_key("type"));
    }

    #[test]
    fn test_parse_arguments_missing_required_field() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestArgs {
            #[serde(rename = "required_field")]
            _required_field: String,
        }

        let args = serde_json::Map::new();
        let result: std::result::Result<TestArgs, McpError> = BaseToolImpl::parse_arguments(args);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_arguments_typed() {
        use serde::Deserialize;

        #[derive(Deserialize, PartialEq, Debug)]
        struct TestArgs {
            name: String,
            count: Option<i32>,
        }

        let mut args = serde_json::Map::new();
        args.insert("name".to_string(), serde_json::json!("test"));
        args.insert("count".to_string(), serde_json::json!(42));

        let parsed: TestArgs = BaseToolImpl::parse_arguments(args).unwrap();
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.count, Some(42));
    }

    #[test]
    fn test_create_json_response() {
        let response =
            BaseToolImpl::create_json_response(&serde_json::json!({ "id": "iss_1" })).unwrap();
        assert_eq!(response.is_error, Some(false));
        if let RawContent::Text(text) = &response.content[0].raw {
            let value: serde_json::Value = serde_json::from_str(&text.text).unwrap();
            assert_eq!(value["id"], "iss_1");
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_create_error_response_with_details() {
        let response =
            BaseToolImpl::create_error_response("Boom", Some("details here".to_string()));
        assert_eq!(response.is_error, Some(true));
        if let RawContent::Text(text) = &response.content[0].raw {
            assert_eq!(text.text, "Boom: details here");
        } else {
            panic!("expected text content");
        }
    }
}
