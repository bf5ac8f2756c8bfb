//! Issue tools for MCP operations
//!
//! Each tool is in its own submodule with a dedicated implementation.

pub mod create;
pub mod get;
pub mod list;
pub mod search;
pub mod set_parent;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    registry.register(create::CreateIssueTool::new());
    registry.register(update::UpdateIssueTool::new());
    registry.register(get::GetIssueTool::new());
    registry.register(list::ListIssuesTool::new());
    registry.register(search::SearchIssuesTool::new());
    registry.register(set_parent::SetIssueParentTool::new());
}
