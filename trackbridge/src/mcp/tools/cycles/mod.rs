//! Cycle tools for MCP operations

pub mod get;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all cycle-related tools with the registry
pub fn register_cycle_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListCyclesTool::new());
    registry.register(get::GetCycleTool::new());
}
