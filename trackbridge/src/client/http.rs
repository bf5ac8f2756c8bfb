//! HTTP implementation of the tracker client
//!
//! Speaks GraphQL over HTTPS: every call POSTs `{query, variables}` to the
//! configured endpoint with the API key in the Authorization header, then
//! unwraps the `{data, errors}` envelope. GraphQL errors become
//! [`TrackbridgeError::Api`]; a null node at the query root becomes
//! [`TrackbridgeError::NotFound`].

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::TrackerConfig;
use crate::error::{Result, TrackbridgeError};
use crate::models::{
    Attachment, Comment, Connection, CreateAttachmentInput, CreateCommentInput, CreateIssueInput,
    CreateLabelInput, CreateProjectInput, Cycle, Issue, IssueFilter, IssueLabel, Page, Project,
    Team, UpdateIssueInput, User, WorkflowState,
};

use super::queries;
use super::Tracker;

/// Production tracker client speaking GraphQL over reqwest
pub struct HttpTracker {
    client: reqwest::Client,
    config: TrackerConfig,
}

impl HttpTracker {
    /// Build a client from the given configuration
    pub fn new(config: TrackerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// POST one GraphQL document and return the `data` object
    async fn execute(&self, query: String, variables: Value) -> Result<Value> {
        let response = self
            .client
            .post(self.config.endpoint.clone())
            .header(AUTHORIZATION, &self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TrackbridgeError::Api(format!("HTTP {status}: {body}")));
        }

        let envelope: Value = response.json().await?;
        unwrap_envelope(envelope)
    }

    /// Run a query and deserialize the node at `path`, treating a missing
    /// or null node as "entity not found"
    async fn query_node<T: DeserializeOwned>(
        &self,
        query: &str,
        fragments: &[&str],
        variables: Value,
        path: &[&str],
        entity: &'static str,
        id: &str,
    ) -> Result<T> {
        let document = queries::with_fragments(query, fragments);
        let data = self.execute(document, variables).await?;
        match extract(&data, path) {
            Some(node) => Ok(serde_json::from_value(node.clone())?),
            None => Err(TrackbridgeError::not_found(entity, id)),
        }
    }

    /// Run a mutation and deserialize the entity out of its payload,
    /// requiring the payload's `success` flag
    async fn mutate<T: DeserializeOwned>(
        &self,
        query: &str,
        fragments: &[&str],
        variables: Value,
        root: &str,
        entity_key: &str,
    ) -> Result<T> {
        let document = queries::with_fragments(query, fragments);
        let data = self.execute(document, variables).await?;
        let payload = data
            .get(root)
            .filter(|p| !p.is_null())
            .ok_or_else(|| TrackbridgeError::Api(format!("{root}: empty mutation payload")))?;

        if !payload
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false)
        {
            return Err(TrackbridgeError::Api(format!(
                "{root}: the tracker reported the mutation as unsuccessful"
            )));
        }

        let node = payload
            .get(entity_key)
            .filter(|n| !n.is_null())
            .ok_or_else(|| {
                TrackbridgeError::Api(format!("{root}: payload is missing {entity_key}"))
            })?;
        Ok(serde_json::from_value(node.clone())?)
    }

    fn page_variables(page: &Page) -> (u32, Option<String>) {
        (page.limit(), page.after.clone())
    }
}

/// Unwrap a GraphQL `{data, errors}` envelope into its data object
fn unwrap_envelope(envelope: Value) -> Result<Value> {
    if let Some(errors) = envelope.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect();
            let message = if messages.is_empty() {
                "unspecified GraphQL error".to_string()
            } else {
                messages.join("; ")
            };
            return Err(TrackbridgeError::Api(message));
        }
    }

    match envelope.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err(TrackbridgeError::Api(
            "response carried neither data nor errors".to_string(),
        )),
    }
}

/// Walk nested object keys, returning None on a missing or null node
fn extract<'a>(data: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = data;
    for key in path {
        current = current.get(key)?;
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Build the remote filter object from the flat tool-side filter
fn issue_filter_value(filter: &IssueFilter) -> Value {
    let mut fields = serde_json::Map::new();
    if let Some(team_id) = &filter.team_id {
        fields.insert("team".to_string(), json!({ "id": { "eq": team_id } }));
    }
    if let Some(assignee_id) = &filter.assignee_id {
        fields.insert("assignee".to_string(), json!({ "id": { "eq": assignee_id } }));
    }
    if let Some(state_id) = &filter.state_id {
        fields.insert("state".to_string(), json!({ "id": { "eq": state_id } }));
    }
    if let Some(label_id) = &filter.label_id {
        fields.insert(
            "labels".to_string(),
            json!({ "some": { "id": { "eq": label_id } } }),
        );
    }
    if let Some(project_id) = &filter.project_id {
        fields.insert("project".to_string(), json!({ "id": { "eq": project_id } }));
    }
    Value::Object(fields)
}

#[async_trait]
impl Tracker for HttpTracker {
    async fn viewer(&self) -> Result<User> {
        self.query_node(
            queries::VIEWER,
            &[queries::USER_FRAGMENT],
            json!({}),
            &["viewer"],
            "viewer",
            "me",
        )
        .await
    }

    async fn user(&self, id: &str) -> Result<User> {
        self.query_node(
            queries::USER,
            &[queries::USER_FRAGMENT],
            json!({ "id": id }),
            &["user"],
            "user",
            id,
        )
        .await
    }

    async fn users(&self, page: Page) -> Result<Connection<User>> {
        let (first, after) = Self::page_variables(&page);
        self.query_node(
            queries::USERS,
            &[queries::USER_FRAGMENT],
            json!({ "first": first, "after": after }),
            &["users"],
            "users",
            "",
        )
        .await
    }

    async fn team(&self, id: &str) -> Result<Team> {
        self.query_node(
            queries::TEAM,
            &[queries::TEAM_FRAGMENT],
            json!({ "id": id }),
            &["team"],
            "team",
            id,
        )
        .await
    }

    async fn teams(&self, page: Page) -> Result<Connection<Team>> {
        let (first, after) = Self::page_variables(&page);
        self.query_node(
            queries::TEAMS,
            &[queries::TEAM_FRAGMENT],
            json!({ "first": first, "after": after }),
            &["teams"],
            "teams",
            "",
        )
        .await
    }

    async fn team_states(&self, team_id: &str) -> Result<Vec<WorkflowState>> {
        let connection: Connection<WorkflowState> = self
            .query_node(
                queries::TEAM_STATES,
                &[queries::STATE_FRAGMENT],
                json!({ "id": team_id }),
                &["team", "states"],
                "team",
                team_id,
            )
            .await?;
        Ok(connection.nodes)
    }

    async fn team_members(&self, team_id: &str) -> Result<Vec<User>> {
        let connection: Connection<User> = self
            .query_node(
                queries::TEAM_MEMBERS,
                &[queries::USER_FRAGMENT],
                json!({ "id": team_id }),
                &["team", "members"],
                "team",
                team_id,
            )
            .await?;
        Ok(connection.nodes)
    }

    async fn workflow_state(&self, id: &str) -> Result<WorkflowState> {
        self.query_node(
            queries::WORKFLOW_STATE,
            &[queries::STATE_FRAGMENT],
            json!({ "id": id }),
            &["workflowState"],
            "workflow state",
            id,
        )
        .await
    }

    async fn issue(&self, id: &str) -> Result<Issue> {
        self.query_node(
            queries::ISSUE,
            &[queries::ISSUE_FRAGMENT],
            json!({ "id": id }),
            &["issue"],
            "issue",
            id,
        )
        .await
    }

    async fn issues(&self, filter: IssueFilter, page: Page) -> Result<Connection<Issue>> {
        let (first, after) = Self::page_variables(&page);
        let filter_value = if filter.is_empty() {
            Value::Null
        } else {
            issue_filter_value(&filter)
        };
        self.query_node(
            queries::ISSUES,
            &[queries::ISSUE_FRAGMENT],
            json!({ "filter": filter_value, "first": first, "after": after }),
            &["issues"],
            "issues",
            "",
        )
        .await
    }

    async fn search_issues(&self, query: &str, page: Page) -> Result<Connection<Issue>> {
        let (first, after) = Self::page_variables(&page);
        self.query_node(
            queries::SEARCH_ISSUES,
            &[queries::ISSUE_FRAGMENT],
            json!({ "query": query, "first": first, "after": after }),
            &["issueSearch"],
            "issue search",
            query,
        )
        .await
    }

    async fn issue_labels(&self, issue_id: &str) -> Result<Vec<IssueLabel>> {
        let connection: Connection<IssueLabel> = self
            .query_node(
                queries::ISSUE_LABELS,
                &[queries::LABEL_FRAGMENT],
                json!({ "id": issue_id }),
                &["issue", "labels"],
                "issue",
                issue_id,
            )
            .await?;
        Ok(connection.nodes)
    }

    async fn issue_comments(&self, issue_id: &str) -> Result<Vec<Comment>> {
        let connection: Connection<Comment> = self
            .query_node(
                queries::ISSUE_COMMENTS,
                &[],
                json!({ "id": issue_id }),
                &["issue", "comments"],
                "issue",
                issue_id,
            )
            .await?;
        Ok(connection.nodes)
    }

    async fn issue_attachments(&self, issue_id: &str) -> Result<Vec<Attachment>> {
        let connection: Connection<Attachment> = self
            .query_node(
                queries::ISSUE_ATTACHMENTS,
                &[],
                json!({ "id": issue_id }),
                &["issue", "attachments"],
                "issue",
                issue_id,
            )
            .await?;
        Ok(connection.nodes)
    }

    async fn create_issue(&self, input: CreateIssueInput) -> Result<Issue> {
        self.mutate(
            queries::CREATE_ISSUE,
            &[queries::ISSUE_FRAGMENT],
            json!({ "input": input }),
            "issueCreate",
            "issue",
        )
        .await
    }

    async fn update_issue(&self, id: &str, input: UpdateIssueInput) -> Result<Issue> {
        self.mutate(
            queries::UPDATE_ISSUE,
            &[queries::ISSUE_FRAGMENT],
            json!({ "id": id, "input": input }),
            "issueUpdate",
            "issue",
        )
        .await
    }

    async fn set_issue_parent(&self, id: &str, parent_id: Option<&str>) -> Result<Issue> {
        // parentId must be present-and-null to detach, so the input is
        // built by hand rather than through UpdateIssueInput
        self.mutate(
            queries::UPDATE_ISSUE,
            &[queries::ISSUE_FRAGMENT],
            json!({ "id": id, "input": { "parentId": parent_id } }),
            "issueUpdate",
            "issue",
        )
        .await
    }

    async fn project(&self, id: &str) -> Result<Project> {
        self.query_node(
            queries::PROJECT,
            &[queries::PROJECT_FRAGMENT],
            json!({ "id": id }),
            &["project"],
            "project",
            id,
        )
        .await
    }

    async fn projects(&self, page: Page) -> Result<Connection<Project>> {
        let (first, after) = Self::page_variables(&page);
        self.query_node(
            queries::PROJECTS,
            &[queries::PROJECT_FRAGMENT],
            json!({ "first": first, "after": after }),
            &["projects"],
            "projects",
            "",
        )
        .await
    }

    async fn project_teams(&self, project_id: &str) -> Result<Vec<Team>> {
        let connection: Connection<Team> = self
            .query_node(
                queries::PROJECT_TEAMS,
                &[queries::TEAM_FRAGMENT],
                json!({ "id": project_id }),
                &["project", "teams"],
                "project",
                project_id,
            )
            .await?;
        Ok(connection.nodes)
    }

    async fn create_project(&self, input: CreateProjectInput) -> Result<Project> {
        self.mutate(
            queries::CREATE_PROJECT,
            &[queries::PROJECT_FRAGMENT],
            json!({ "input": input }),
            "projectCreate",
            "project",
        )
        .await
    }

    async fn labels(&self, team_id: Option<&str>, page: Page) -> Result<Connection<IssueLabel>> {
        let (first, after) = Self::page_variables(&page);
        let filter = match team_id {
            Some(team_id) => json!({ "team": { "id": { "eq": team_id } } }),
            None => Value::Null,
        };
        self.query_node(
            queries::LABELS,
            &[queries::LABEL_FRAGMENT],
            json!({ "filter": filter, "first": first, "after": after }),
            &["issueLabels"],
            "labels",
            "",
        )
        .await
    }

    async fn create_label(&self, input: CreateLabelInput) -> Result<IssueLabel> {
        self.mutate(
            queries::CREATE_LABEL,
            &[queries::LABEL_FRAGMENT],
            json!({ "input": input }),
            "issueLabelCreate",
            "issueLabel",
        )
        .await
    }

    async fn cycle(&self, id: &str) -> Result<Cycle> {
        self.query_node(
            queries::CYCLE,
            &[queries::CYCLE_FRAGMENT],
            json!({ "id": id }),
            &["cycle"],
            "cycle",
            id,
        )
        .await
    }

    async fn cycles(&self, team_id: &str, page: Page) -> Result<Connection<Cycle>> {
        let (first, after) = Self::page_variables(&page);
        self.query_node(
            queries::CYCLES,
            &[queries::CYCLE_FRAGMENT],
            json!({ "id": team_id, "first": first, "after": after }),
            &["team", "cycles"],
            "team",
            team_id,
        )
        .await
    }

    async fn cycle_issues(&self, cycle_id: &str) -> Result<Vec<Issue>> {
        let connection: Connection<Issue> = self
            .query_node(
                queries::CYCLE_ISSUES,
                &[queries::ISSUE_FRAGMENT],
                json!({ "id": cycle_id }),
                &["cycle", "issues"],
                "cycle",
                cycle_id,
            )
            .await?;
        Ok(connection.nodes)
    }

    async fn create_comment(&self, input: CreateCommentInput) -> Result<Comment> {
        self.mutate(
            queries::CREATE_COMMENT,
            &[],
            json!({ "input": input }),
            "commentCreate",
            "comment",
        )
        .await
    }

    async fn create_attachment(&self, input: CreateAttachmentInput) -> Result<Attachment> {
        self.mutate(
            queries::CREATE_ATTACHMENT,
            &[],
            json!({ "input": input }),
            "attachmentCreate",
            "attachment",
        )
        .await
    }

    async fn user_assigned_issues(&self, user_id: &str, page: Page) -> Result<Connection<Issue>> {
        let (first, after) = Self::page_variables(&page);
        self.query_node(
            queries::USER_ASSIGNED_ISSUES,
            &[queries::ISSUE_FRAGMENT],
            json!({ "id": user_id, "first": first, "after": after }),
            &["user", "assignedIssues"],
            "user",
            user_id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_envelope_data() {
        let data = unwrap_envelope(json!({ "data": { "issue": { "id": "iss_1" } } })).unwrap();
        assert_eq!(data["issue"]["id"], "iss_1");
    }

    #[test]
    fn test_unwrap_envelope_errors() {
        let result = unwrap_envelope(json!({
            "errors": [
                { "message": "Entity not found" },
                { "message": "Field is required" }
            ]
        }));
        match result {
            Err(TrackbridgeError::Api(msg)) => {
                assert_eq!(msg, "Entity not found; Field is required");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_unwrap_envelope_empty() {
        let result = unwrap_envelope(json!({ "data": null }));
        assert!(matches!(result, Err(TrackbridgeError::Api(_))));
    }

    #[test]
    fn test_extract_walks_path() {
        let data = json!({ "issue": { "labels": { "nodes": [] } } });
        let node = extract(&data, &["issue", "labels"]).unwrap();
        assert!(node.get("nodes").is_some());
    }

    #[test]
    fn test_extract_null_root_is_none() {
        let data = json!({ "issue": null });
        assert!(extract(&data, &["issue"]).is_none());
        assert!(extract(&data, &["issue", "labels"]).is_none());
    }

    #[test]
    fn test_issue_filter_value_shapes() {
        let filter = IssueFilter {
            team_id: Some("team_1".to_string()),
            label_id: Some("label_1".to_string()),
            ..Default::default()
        };
        let value = issue_filter_value(&filter);
        assert_eq!(value["team"]["id"]["eq"], "team_1");
        assert_eq!(value["labels"]["some"]["id"]["eq"], "label_1");
        assert!(value.get("assignee").is_none());
    }

    #[test]
    fn test_empty_filter_is_empty_object() {
        let value = issue_filter_value(&IssueFilter::default());
        assert_eq!(value, json!({}));
    }
}
