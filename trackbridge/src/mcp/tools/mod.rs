//! MCP tool implementations
//!
//! Tools are organized by entity noun, one submodule per verb, following a
//! `noun_verb` naming convention (issue_create, team_list, ...). Each noun
//! module exposes a registration function wiring its tools into the
//! registry.

pub mod attachments;
pub mod comments;
pub mod cycles;
pub mod issues;
pub mod labels;
pub mod projects;
pub mod teams;
pub mod users;

use super::tool_registry::ToolRegistry;

/// Register every tool exposed by the adapter
pub fn register_all_tools(registry: &mut ToolRegistry) {
    issues::register_issue_tools(registry);
    teams::register_team_tools(registry);
    projects::register_project_tools(registry);
    labels::register_label_tools(registry);
    cycles::register_cycle_tools(registry);
    comments::register_comment_tools(registry);
    attachments::register_attachment_tools(registry);
    users::register_user_tools(registry);
}
