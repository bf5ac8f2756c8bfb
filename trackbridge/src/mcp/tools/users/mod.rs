//! User tools for MCP operations

pub mod get;
pub mod list;
pub mod me;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all user-related tools with the registry
pub fn register_user_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListUsersTool::new());
    registry.register(get::GetUserTool::new());
    registry.register(me::MeTool::new());
}
