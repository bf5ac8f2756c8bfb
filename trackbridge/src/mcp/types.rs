//! Request and response types for MCP operations

use serde::Deserialize;

/// Request to create a new issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateIssueRequest {
    /// Id of the team the issue belongs to
    pub team_id: String,
    /// Issue title
    pub title: String,
    /// Markdown body
    pub description: Option<String>,
    /// Priority: 0 none, 1 urgent, 2 high, 3 normal, 4 low
    pub priority: Option<u8>,
    /// Workflow state id
    pub state_id: Option<String>,
    /// Assignee user id
    pub assignee_id: Option<String>,
    /// Label ids to apply
    pub label_ids: Option<Vec<String>>,
    /// Parent issue id; creates a sub-issue
    pub parent_id: Option<String>,
    /// Point estimate
    pub estimate: Option<f64>,
    /// Due date as YYYY-MM-DD
    pub due_date: Option<String>,
}

/// Request to update an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateIssueRequest {
    /// Issue id to update
    pub id: String,
    /// New title
    pub title: Option<String>,
    /// New markdown body
    pub description: Option<String>,
    /// New priority
    pub priority: Option<u8>,
    /// New workflow state id
    pub state_id: Option<String>,
    /// New assignee user id
    pub assignee_id: Option<String>,
    /// Replacement label ids
    pub label_ids: Option<Vec<String>>,
    /// New point estimate
    pub estimate: Option<f64>,
    /// New due date as YYYY-MM-DD
    pub due_date: Option<String>,
}

/// Request to fetch one issue with its relations resolved
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIssueRequest {
    /// Issue id
    pub id: String,
}

/// Request to list issues matching a filter
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListIssuesRequest {
    /// Restrict to a team
    pub team_id: Option<String>,
    /// Restrict to an assignee
    pub assignee_id: Option<String>,
    /// Restrict to a workflow state
    pub state_id: Option<String>,
    /// Restrict to issues carrying a label
    pub label_id: Option<String>,
    /// Restrict to a project
    pub project_id: Option<String>,
    /// Page size (max 250)
    pub first: Option<u32>,
    /// Cursor from a previous call
    pub after: Option<String>,
}

/// Request to search issues by text
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchIssuesRequest {
    /// Free-text query matched against title and description
    pub query: String,
    /// Page size (max 250)
    pub first: Option<u32>,
    /// Cursor from a previous call
    pub after: Option<String>,
}

/// Request to set or clear an issue's parent
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetIssueParentRequest {
    /// Issue id to re-parent
    pub id: String,
    /// New parent issue id; omit to detach the sub-issue
    pub parent_id: Option<String>,
}

/// Request to list teams
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListTeamsRequest {
    /// Page size (max 250)
    pub first: Option<u32>,
    /// Cursor from a previous call
    pub after: Option<String>,
}

/// Request to fetch one team with states and members
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetTeamRequest {
    /// Team id
    pub id: String,
}

/// Request to list projects
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListProjectsRequest {
    /// Page size (max 250)
    pub first: Option<u32>,
    /// Cursor from a previous call
    pub after: Option<String>,
}

/// Request to create a project
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateProjectRequest {
    /// Project name
    pub name: String,
    /// Teams the project belongs to
    pub team_ids: Vec<String>,
    /// Project description
    pub description: Option<String>,
    /// Initial lifecycle state
    pub state: Option<String>,
}

/// Request to fetch one project with lead and teams
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetProjectRequest {
    /// Project id
    pub id: String,
}

/// Request to list labels
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListLabelsRequest {
    /// Restrict to a team's labels
    pub team_id: Option<String>,
    /// Page size (max 250)
    pub first: Option<u32>,
    /// Cursor from a previous call
    pub after: Option<String>,
}

/// Request to create a label
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateLabelRequest {
    /// Id of the team the label belongs to
    pub team_id: String,
    /// Label name
    pub name: String,
    /// Display color as #rrggbb
    pub color: Option<String>,
    /// Label description
    pub description: Option<String>,
}

/// Request to list a team's cycles
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListCyclesRequest {
    /// Team whose cycles to list
    pub team_id: String,
    /// Page size (max 250)
    pub first: Option<u32>,
    /// Cursor from a previous call
    pub after: Option<String>,
}

/// Request to fetch one cycle with its team and issues
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCycleRequest {
    /// Cycle id
    pub id: String,
}

/// Request to comment on an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateCommentRequest {
    /// Issue to comment on
    pub issue_id: String,
    /// Markdown comment body
    pub body: String,
}

/// Request to list an issue's comments
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListCommentsRequest {
    /// Issue whose comments to list
    pub issue_id: String,
}

/// Request to attach a URL to an issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateAttachmentRequest {
    /// Issue to attach to
    pub issue_id: String,
    /// URL to attach
    pub url: String,
    /// Display title
    pub title: String,
    /// Secondary line shown under the title
    pub subtitle: Option<String>,
}

/// Request to list an issue's attachments
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListAttachmentsRequest {
    /// Issue whose attachments to list
    pub issue_id: String,
}

/// Request to list workspace users
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListUsersRequest {
    /// Page size (max 250)
    pub first: Option<u32>,
    /// Cursor from a previous call
    pub after: Option<String>,
}

/// Request to fetch one user with their assigned issues
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetUserRequest {
    /// User id
    pub id: String,
}

/// Request for the authenticated user
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct MeRequest {}
