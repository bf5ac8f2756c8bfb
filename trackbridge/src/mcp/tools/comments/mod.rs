//! Comment tools for MCP operations

pub mod create;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all comment-related tools with the registry
pub fn register_comment_tools(registry: &mut ToolRegistry) {
    registry.register(create::CreateCommentTool::new());
    registry.register(list::ListCommentsTool::new());
}
