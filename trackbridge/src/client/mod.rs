//! Remote tracker client
//!
//! [`Tracker`] is the seam between the tool layer and the remote service:
//! entity accessors (by id, by filter) and mutation methods. The production
//! implementation is [`HttpTracker`]; [`mock::MockTracker`] backs tests and
//! offline tool invocation.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    Attachment, Comment, Connection, CreateAttachmentInput, CreateCommentInput, CreateIssueInput,
    CreateLabelInput, CreateProjectInput, Cycle, Issue, IssueFilter, IssueLabel, Page, Project,
    Team, UpdateIssueInput, User, WorkflowState,
};

mod http;
pub mod mock;
mod queries;

pub use http::HttpTracker;

/// Accessors and mutations offered by the remote issue tracker.
///
/// Each accessor resolves one entity or one page of entities; relation
/// edges on the returned models carry ids only. Mutations return the
/// affected entity as the remote service sees it after the change.
#[async_trait]
pub trait Tracker: Send + Sync {
    /// The user the API key authenticates as
    async fn viewer(&self) -> Result<User>;

    /// A user by id
    async fn user(&self, id: &str) -> Result<User>;

    /// A page of workspace users
    async fn users(&self, page: Page) -> Result<Connection<User>>;

    /// A team by id
    async fn team(&self, id: &str) -> Result<Team>;

    /// A page of teams
    async fn teams(&self, page: Page) -> Result<Connection<Team>>;

    /// All workflow states of a team
    async fn team_states(&self, team_id: &str) -> Result<Vec<WorkflowState>>;

    /// All members of a team
    async fn team_members(&self, team_id: &str) -> Result<Vec<User>>;

    /// A workflow state by id
    async fn workflow_state(&self, id: &str) -> Result<WorkflowState>;

    /// An issue by id
    async fn issue(&self, id: &str) -> Result<Issue>;

    /// A page of issues matching the filter
    async fn issues(&self, filter: IssueFilter, page: Page) -> Result<Connection<Issue>>;

    /// A page of issues matching a free-text query
    async fn search_issues(&self, query: &str, page: Page) -> Result<Connection<Issue>>;

    /// Labels applied to an issue
    async fn issue_labels(&self, issue_id: &str) -> Result<Vec<IssueLabel>>;

    /// Comments on an issue, oldest first
    async fn issue_comments(&self, issue_id: &str) -> Result<Vec<Comment>>;

    /// Attachments on an issue
    async fn issue_attachments(&self, issue_id: &str) -> Result<Vec<Attachment>>;

    /// Create an issue
    async fn create_issue(&self, input: CreateIssueInput) -> Result<Issue>;

    /// Update an issue
    async fn update_issue(&self, id: &str, input: UpdateIssueInput) -> Result<Issue>;

    /// Set or clear the parent of an issue; `None` detaches the sub-issue
    async fn set_issue_parent(&self, id: &str, parent_id: Option<&str>) -> Result<Issue>;

    /// A project by id
    async fn project(&self, id: &str) -> Result<Project>;

    /// A page of projects
    async fn projects(&self, page: Page) -> Result<Connection<Project>>;

    /// Teams a project belongs to
    async fn project_teams(&self, project_id: &str) -> Result<Vec<Team>>;

    /// Create a project
    async fn create_project(&self, input: CreateProjectInput) -> Result<Project>;

    /// A page of labels, optionally restricted to a team
    async fn labels(&self, team_id: Option<&str>, page: Page) -> Result<Connection<IssueLabel>>;

    /// Create a label
    async fn create_label(&self, input: CreateLabelInput) -> Result<IssueLabel>;

    /// A cycle by id
    async fn cycle(&self, id: &str) -> Result<Cycle>;

    /// A page of a team's cycles
    async fn cycles(&self, team_id: &str, page: Page) -> Result<Connection<Cycle>>;

    /// Issues scheduled into a cycle
    async fn cycle_issues(&self, cycle_id: &str) -> Result<Vec<Issue>>;

    /// Create a comment on an issue
    async fn create_comment(&self, input: CreateCommentInput) -> Result<Comment>;

    /// Attach a URL to an issue
    async fn create_attachment(&self, input: CreateAttachmentInput) -> Result<Attachment>;

    /// A page of issues assigned to a user
    async fn user_assigned_issues(&self, user_id: &str, page: Page) -> Result<Connection<Issue>>;
}
