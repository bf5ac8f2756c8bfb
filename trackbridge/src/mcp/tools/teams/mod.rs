//! Team tools for MCP operations

pub mod get;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all team-related tools with the registry
pub fn register_team_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListTeamsTool::new());
    registry.register(get::GetTeamTool::new());
}
