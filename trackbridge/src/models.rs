//! Domain models mirroring the remote tracker's object graph
//!
//! Wire representations are camelCase GraphQL JSON; every struct here
//! derives serde with `rename_all = "camelCase"` so the models stay
//! snake_case on the Rust side. Relation edges carry only the related
//! entity's id ([`EntityRef`]); resolving the full record is a separate
//! client call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum page size accepted by the remote tracker
pub const MAX_PAGE_SIZE: u32 = 250;

/// Default page size when a tool call does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// A relation edge: the id of a related entity, nothing else
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Identifier of the referenced entity
    pub id: String,
}

impl EntityRef {
    /// Construct a reference from an id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Cursor pagination metadata returned with every connection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether another page exists after `end_cursor`
    pub has_next_page: bool,
    /// Cursor to pass as `after` for the next page
    pub end_cursor: Option<String>,
}

/// A page of nodes plus its pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Entities on this page
    pub nodes: Vec<T>,
    /// Cursor metadata for fetching the next page
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// A connection holding the given nodes with no further pages
    pub fn single_page(nodes: Vec<T>) -> Self {
        Self {
            nodes,
            page_info: PageInfo::default(),
        }
    }
}

/// Pagination window requested by a tool call
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Requested page size; clamped to `1..=MAX_PAGE_SIZE`
    pub first: Option<u32>,
    /// Cursor returned by a previous call
    pub after: Option<String>,
}

impl Page {
    /// Page size to send to the remote tracker
    pub fn limit(&self) -> u32 {
        self.first
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// An issue as returned by the remote tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Opaque identifier
    pub id: String,
    /// Human-readable identifier, e.g. "ENG-123"
    pub identifier: String,
    /// Issue title
    pub title: String,
    /// Markdown body
    #[serde(default)]
    pub description: Option<String>,
    /// Priority: 0 none, 1 urgent, 2 high, 3 normal, 4 low
    #[serde(default)]
    pub priority: u8,
    /// Human-readable priority name
    #[serde(default)]
    pub priority_label: Option<String>,
    /// Point estimate
    #[serde(default)]
    pub estimate: Option<f64>,
    /// Due date as an ISO calendar date
    #[serde(default)]
    pub due_date: Option<String>,
    /// Web URL of the issue
    pub url: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Workflow state edge
    #[serde(default)]
    pub state: Option<EntityRef>,
    /// Assignee edge
    #[serde(default)]
    pub assignee: Option<EntityRef>,
    /// Creator edge
    #[serde(default)]
    pub creator: Option<EntityRef>,
    /// Owning team edge
    #[serde(default)]
    pub team: Option<EntityRef>,
    /// Project edge
    #[serde(default)]
    pub project: Option<EntityRef>,
    /// Parent issue edge (set when this is a sub-issue)
    #[serde(default)]
    pub parent: Option<EntityRef>,
    /// Cycle edge
    #[serde(default)]
    pub cycle: Option<EntityRef>,
}

/// A team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Opaque identifier
    pub id: String,
    /// Short key used in issue identifiers, e.g. "ENG"
    pub key: String,
    /// Display name
    pub name: String,
    /// Team description
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A workflow state within a team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    /// Opaque identifier
    pub id: String,
    /// Display name, e.g. "In Progress"
    pub name: String,
    /// State category: backlog, unstarted, started, completed, canceled
    #[serde(rename = "type")]
    pub state_type: String,
    /// Display color as `#rrggbb`
    pub color: String,
    /// Ordering position within the team's board
    #[serde(default)]
    pub position: f64,
}

/// A project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Project description
    #[serde(default)]
    pub description: String,
    /// Lifecycle state: planned, started, paused, completed, canceled
    pub state: String,
    /// Completion fraction in `0.0..=1.0`
    #[serde(default)]
    pub progress: f64,
    /// Planned start date (ISO calendar date)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Planned target date (ISO calendar date)
    #[serde(default)]
    pub target_date: Option<String>,
    /// Web URL of the project
    pub url: String,
    /// Project lead edge
    #[serde(default)]
    pub lead: Option<EntityRef>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// An issue label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLabel {
    /// Opaque identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Display color as `#rrggbb`
    pub color: String,
    /// Label description
    #[serde(default)]
    pub description: Option<String>,
    /// Owning team edge; workspace labels carry none
    #[serde(default)]
    pub team: Option<EntityRef>,
}

/// A cycle (time-boxed iteration) within a team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    /// Opaque identifier
    pub id: String,
    /// Sequential cycle number within the team
    pub number: u32,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Cycle start
    pub starts_at: DateTime<Utc>,
    /// Cycle end
    pub ends_at: DateTime<Utc>,
    /// Set once the cycle has been completed
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Owning team edge
    pub team: EntityRef,
}

/// A comment on an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Opaque identifier
    pub id: String,
    /// Markdown body
    pub body: String,
    /// Author edge; absent for integration-created comments
    #[serde(default)]
    pub user: Option<EntityRef>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A URL attachment on an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Opaque identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Secondary line shown under the title
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Attached URL
    pub url: String,
    /// Creator edge
    #[serde(default)]
    pub creator: Option<EntityRef>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A workspace user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Short display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Email address
    pub email: String,
    /// Whether the account is active
    #[serde(default = "default_true")]
    pub active: bool,
    /// Whether the user is a workspace admin
    #[serde(default)]
    pub admin: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Fields for creating an issue
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueInput {
    /// Owning team id
    pub team_id: String,
    /// Issue title
    pub title: String,
    /// Markdown body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Priority: 0 none, 1 urgent, 2 high, 3 normal, 4 low
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Workflow state id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    /// Assignee user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    /// Label ids to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    /// Parent issue id (creates a sub-issue)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Point estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
    /// Due date as an ISO calendar date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Fields for updating an issue; every field is optional and only present
/// fields are sent to the remote tracker
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueInput {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New markdown body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// New workflow state id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    /// New assignee user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    /// Replacement label ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    /// New point estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<f64>,
    /// New due date as an ISO calendar date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl UpdateIssueInput {
    /// Whether the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.state_id.is_none()
            && self.assignee_id.is_none()
            && self.label_ids.is_none()
            && self.estimate.is_none()
            && self.due_date.is_none()
    }
}

/// Fields for creating a project
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    /// Display name
    pub name: String,
    /// Teams the project belongs to
    pub team_ids: Vec<String>,
    /// Project description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial lifecycle state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Fields for creating a label
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabelInput {
    /// Owning team id
    pub team_id: String,
    /// Display name
    pub name: String,
    /// Display color as `#rrggbb`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Label description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields for creating a comment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    /// Issue to comment on
    pub issue_id: String,
    /// Markdown body
    pub body: String,
}

/// Fields for attaching a URL to an issue
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttachmentInput {
    /// Issue to attach to
    pub issue_id: String,
    /// URL to attach
    pub url: String,
    /// Display title
    pub title: String,
    /// Secondary line shown under the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Filter for listing issues; fields combine conjunctively
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
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
}

impl IssueFilter {
    /// Whether no filter fields are set
    pub fn is_empty(&self) -> bool {
        self.team_id.is_none()
            && self.assignee_id.is_none()
            && self.state_id.is_none()
            && self.label_id.is_none()
            && self.project_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_limit_default() {
        let page = Page::default();
        assert_eq!(page.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_limit_clamped() {
        let page = Page {
            first: Some(10_000),
            after: None,
        };
        assert_eq!(page.limit(), MAX_PAGE_SIZE);

        let page = Page {
            first: Some(0),
            after: None,
        };
        assert_eq!(page.limit(), 1);
    }

    #[test]
    fn test_issue_deserializes_from_wire_shape() {
        let issue: Issue = serde_json::from_value(serde_json::json!({
            "id": "iss_1",
            "identifier": "ENG-42",
            "title": "Fix login flow",
            "description": "Users get logged out",
            "priority": 2,
            "priorityLabel": "High",
            "url": "https://tracker.example/issue/ENG-42",
            "createdAt": "2024-03-01T12:00:00Z",
            "updatedAt": "2024-03-02T08:30:00Z",
            "state": { "id": "state_1" },
            "assignee": { "id": "user_1" },
            "team": { "id": "team_1" }
        }))
        .unwrap();

        assert_eq!(issue.identifier, "ENG-42");
        assert_eq!(issue.priority, 2);
        assert_eq!(issue.state.as_ref().unwrap().id, "state_1");
        assert!(issue.parent.is_none());
        assert!(issue.cycle.is_none());
    }

    #[test]
    fn test_update_input_skips_absent_fields() {
        let input = UpdateIssueInput {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["title"], "New title");
    }

    #[test]
    fn test_update_input_is_empty() {
        assert!(UpdateIssueInput::default().is_empty());
        assert!(!UpdateIssueInput {
            priority: Some(1),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_create_issue_input_camel_case() {
        let input = CreateIssueInput {
            team_id: "team_1".to_string(),
            title: "T".to_string(),
            parent_id: Some("iss_0".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["teamId"], "team_1");
        assert_eq!(value["parentId"], "iss_0");
        assert!(value.get("stateId").is_none());
    }

    #[test]
    fn test_workflow_state_type_field() {
        let state: WorkflowState = serde_json::from_value(serde_json::json!({
            "id": "state_1",
            "name": "In Progress",
            "type": "started",
            "color": "#f2c94c",
            "position": 3.0
        }))
        .unwrap();
        assert_eq!(state.state_type, "started");
    }

    #[test]
    fn test_connection_single_page() {
        let conn = Connection::single_page(vec![1, 2, 3]);
        assert_eq!(conn.nodes.len(), 3);
        assert!(!conn.page_info.has_next_page);
        assert!(conn.page_info.end_cursor.is_none());
    }
}
