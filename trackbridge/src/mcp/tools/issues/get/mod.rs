//! Detailed issue view tool
//!
//! The fan-out/fan-in join: one root lookup followed by a fixed batch of
//! concurrent relation lookups (state, assignee, creator, team, project,
//! parent, cycle, labels, comments, attachments), merged into one record.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::client::Tracker;
use crate::error::Result;
use crate::mcp::responses::{issue_detail_json, IssueRelations};
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetIssueRequest;
use crate::models::{Cycle, EntityRef, Issue, Project, Team, User, WorkflowState};

/// Tool for fetching one issue with its relations resolved
#[derive(Default)]
pub struct GetIssueTool;

impl GetIssueTool {
    /// Creates a new instance of the GetIssueTool
    pub fn new() -> Self {
        Self
    }
}

async fn maybe_state(
    tracker: &dyn Tracker,
    edge: Option<&EntityRef>,
) -> Result<Option<WorkflowState>> {
    match edge {
        Some(edge) => tracker.workflow_state(&edge.id).await.map(Some),
        None => Ok(None),
    }
}

async fn maybe_user(tracker: &dyn Tracker, edge: Option<&EntityRef>) -> Result<Option<User>> {
    match edge {
        Some(edge) => tracker.user(&edge.id).await.map(Some),
        None => Ok(None),
    }
}

async fn maybe_team(tracker: &dyn Tracker, edge: Option<&EntityRef>) -> Result<Option<Team>> {
    match edge {
        Some(edge) => tracker.team(&edge.id).await.map(Some),
        None => Ok(None),
    }
}

async fn maybe_project(
    tracker: &dyn Tracker,
    edge: Option<&EntityRef>,
) -> Result<Option<Project>> {
    match edge {
        Some(edge) => tracker.project(&edge.id).await.map(Some),
        None => Ok(None),
    }
}

async fn maybe_issue(tracker: &dyn Tracker, edge: Option<&EntityRef>) -> Result<Option<Issue>> {
    match edge {
        Some(edge) => tracker.issue(&edge.id).await.map(Some),
        None => Ok(None),
    }
}

async fn maybe_cycle(tracker: &dyn Tracker, edge: Option<&EntityRef>) -> Result<Option<Cycle>> {
    match edge {
        Some(edge) => tracker.cycle(&edge.id).await.map(Some),
        None => Ok(None),
    }
}

/// Resolve every relation of the issue concurrently
pub(crate) async fn resolve_relations(
    tracker: &dyn Tracker,
    issue: &Issue,
) -> Result<IssueRelations> {
    let (state, assignee, creator, team, project, parent, cycle, labels, comments, attachments) =
        tokio::try_join!(
            maybe_state(tracker, issue.state.as_ref()),
            maybe_user(tracker, issue.assignee.as_ref()),
            maybe_user(tracker, issue.creator.as_ref()),
            maybe_team(tracker, issue.team.as_ref()),
            maybe_project(tracker, issue.project.as_ref()),
            maybe_issue(tracker, issue.parent.as_ref()),
            maybe_cycle(tracker, issue.cycle.as_ref()),
            tracker.issue_labels(&issue.id),
            tracker.issue_comments(&issue.id),
            tracker.issue_attachments(&issue.id),
        )?;

    Ok(IssueRelations {
        state,
        assignee,
        creator,
        team,
        project,
        parent,
        cycle,
        labels,
        comments,
        attachments,
    })
}

#[async_trait]
impl McpTool for GetIssueTool {
    fn name(&self) -> &'static str {
        "issue_get"
    }

    fn description(&self) -> &'static str {
        "Fetch one issue as a detailed record with its workflow state, assignee, creator, team, \
         project, parent, cycle, labels, comments and attachments resolved."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Issue id"
                }
            },
            "required": ["id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpValidation::validate_not_empty(&request.id, "issue id")
            .map_err(|e| McpErrorHandler::handle_error(e, "validate issue id"))?;

        tracing::debug!("Fetching issue {}", request.id);

        let tracker = context.tracker.as_ref();
        let issue = McpErrorHandler::handle_result(tracker.issue(&request.id).await, "get issue")?;
        let relations = McpErrorHandler::handle_result(
            resolve_relations(tracker, &issue).await,
            "resolve issue relations",
        )?;

        BaseToolImpl::create_json_response(&issue_detail_json(&issue, &relations))
    }
}
