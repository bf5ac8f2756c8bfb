//! Attachment tools for MCP operations

pub mod create;
pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all attachment-related tools with the registry
pub fn register_attachment_tools(registry: &mut ToolRegistry) {
    registry.register(create::CreateAttachmentTool::new());
    registry.register(list::ListAttachmentsTool::new());
}
