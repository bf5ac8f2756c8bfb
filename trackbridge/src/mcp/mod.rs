//! Model Context Protocol (MCP) server support
//!
//! The inbound boundary: a tool registry dispatching named operations to
//! handler objects, an rmcp `ServerHandler`, and the shared utilities the
//! handlers project remote entities through.

/// Flat JSON projections for tool responses
pub mod responses;

/// MCP server and rmcp handler implementation
pub mod server;

/// Error mapping, validation and formatting shared by tool handlers
pub mod shared_utils;

/// Tool registry and the `McpTool` dispatch trait
pub mod tool_registry;

/// Tool implementations grouped by entity noun
pub mod tools;

/// Request structures for tool arguments
pub mod types;

pub use server::McpServer;
pub use tool_registry::{McpTool, ToolContext, ToolRegistry};
