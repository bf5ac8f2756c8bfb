//! Mock in-memory tracker implementation for testing
//!
//! `MockTracker` implements the full [`Tracker`] trait against HashMaps,
//! so tool handlers can be exercised without a network. It seeds a small
//! fixture workspace (one team, three workflow states, two users, a
//! project, a cycle, a parent/sub issue pair) and offers failure toggles
//! for driving the error paths.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;

use crate::error::{Result, TrackbridgeError};
use crate::models::{
    Attachment, Comment, Connection, CreateAttachmentInput, CreateCommentInput, CreateIssueInput,
    CreateLabelInput, CreateProjectInput, Cycle, EntityRef, Issue, IssueFilter, IssueLabel, Page,
    PageInfo, Project, Team, UpdateIssueInput, User, WorkflowState,
};

use super::Tracker;

/// Failure toggles for driving error paths in tests
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Fail every accessor with a simulated API error
    pub fail_reads: bool,
    /// Fail every mutation with a simulated API error
    pub fail_mutations: bool,
}

#[derive(Debug, Default)]
struct MockData {
    issues: HashMap<String, Issue>,
    teams: HashMap<String, Team>,
    states: HashMap<String, WorkflowState>,
    projects: HashMap<String, Project>,
    labels: HashMap<String, IssueLabel>,
    cycles: HashMap<String, Cycle>,
    users: HashMap<String, User>,
    comments: HashMap<String, Vec<Comment>>,
    attachments: HashMap<String, Vec<Attachment>>,
    issue_label_ids: HashMap<String, Vec<String>>,
    viewer_id: String,
    issue_counters: HashMap<String, u32>,
    next_id: u64,
}

/// Mock in-memory tracker for tests and offline tool invocation
#[derive(Clone)]
pub struct MockTracker {
    data: Arc<RwLock<MockData>>,
    config: Arc<RwLock<MockConfig>>,
}

/// Fixed timestamp used by all fixtures so tests stay deterministic
fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

impl Default for MockTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTracker {
    /// An empty mock workspace
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(MockData::default())),
            config: Arc::new(RwLock::new(MockConfig::default())),
        }
    }

    /// A mock workspace seeded with fixtures.
    ///
    /// Fixture ids are stable: `team_eng`, `state_backlog`, `state_started`,
    /// `state_done`, `user_alice` (the viewer), `user_bob`, `label_bug`,
    /// `project_apollo`, `cycle_4`, `issue_1` (ENG-1) and its sub-issue
    /// `issue_2` (ENG-2).
    pub fn with_fixtures() -> Self {
        let tracker = Self::new();
        {
            let mut data = tracker.data.try_write().expect("fresh tracker is unshared");
            seed_fixtures(&mut data);
        }
        tracker
    }

    /// Replace the failure toggles
    pub async fn set_config(&self, config: MockConfig) {
        *self.config.write().await = config;
    }

    /// Toggle failure of every read accessor
    pub async fn fail_reads(&self, fail: bool) {
        self.config.write().await.fail_reads = fail;
    }

    /// Toggle failure of every mutation
    pub async fn fail_mutations(&self, fail: bool) {
        self.config.write().await.fail_mutations = fail;
    }

    async fn check_read(&self) -> Result<()> {
        if self.config.read().await.fail_reads {
            return Err(TrackbridgeError::Api("simulated read failure".to_string()));
        }
        Ok(())
    }

    async fn check_mutation(&self) -> Result<()> {
        if self.config.read().await.fail_mutations {
            return Err(TrackbridgeError::Api(
                "simulated mutation failure".to_string(),
            ));
        }
        Ok(())
    }
}

fn seed_fixtures(data: &mut MockData) {
    let now = fixture_time();

    let alice = User {
        id: "user_alice".to_string(),
        name: "Alice Chen".to_string(),
        display_name: Some("alice".to_string()),
        email: "alice@example.com".to_string(),
        active: true,
        admin: true,
        created_at: now,
    };
    let bob = User {
        id: "user_bob".to_string(),
        name: "Bob Ruiz".to_string(),
        display_name: Some("bob".to_string()),
        email: "bob@example.com".to_string(),
        active: true,
        admin: false,
        created_at: now,
    };
    data.viewer_id = alice.id.clone();
    data.users.insert(alice.id.clone(), alice);
    data.users.insert(bob.id.clone(), bob);

    let team = Team {
        id: "team_eng".to_string(),
        key: "ENG".to_string(),
        name: "Engineering".to_string(),
        description: Some("Product engineering".to_string()),
        created_at: now,
    };
    data.teams.insert(team.id.clone(), team);

    for (id, name, state_type, color, position) in [
        ("state_backlog", "Backlog", "backlog", "#bec2c8", 0.0),
        ("state_started", "In Progress", "started", "#f2c94c", 1.0),
        ("state_done", "Done", "completed", "#5e6ad2", 2.0),
    ] {
        data.states.insert(
            id.to_string(),
            WorkflowState {
                id: id.to_string(),
                name: name.to_string(),
                state_type: state_type.to_string(),
                color: color.to_string(),
                position,
            },
        );
    }

    let label = IssueLabel {
        id: "label_bug".to_string(),
        name: "Bug".to_string(),
        color: "#eb5757".to_string(),
        description: Some("Defects".to_string()),
        team: Some(EntityRef::new("team_eng")),
    };
    data.labels.insert(label.id.clone(), label);

    let project = Project {
        id: "project_apollo".to_string(),
        name: "Apollo".to_string(),
        description: "Q2 reliability push".to_string(),
        state: "started".to_string(),
        progress: 0.4,
        start_date: Some("2024-02-01".to_string()),
        target_date: Some("2024-05-31".to_string()),
        url: "https://tracker.example/project/apollo".to_string(),
        lead: Some(EntityRef::new("user_alice")),
        created_at: now,
        updated_at: now,
    };
    data.projects.insert(project.id.clone(), project);

    let cycle = Cycle {
        id: "cycle_4".to_string(),
        number: 4,
        name: Some("Sprint 4".to_string()),
        starts_at: now,
        ends_at: now + chrono::Duration::days(14),
        completed_at: None,
        team: EntityRef::new("team_eng"),
    };
    data.cycles.insert(cycle.id.clone(), cycle);

    let issue_1 = Issue {
        id: "issue_1".to_string(),
        identifier: "ENG-1".to_string(),
        title: "Login sessions expire too early".to_string(),
        description: Some("Users report being logged out after minutes.".to_string()),
        priority: 2,
        priority_label: Some("High".to_string()),
        estimate: Some(3.0),
        due_date: Some("2024-03-15".to_string()),
        url: "https://tracker.example/issue/ENG-1".to_string(),
        created_at: now,
        updated_at: now,
        state: Some(EntityRef::new("state_started")),
        assignee: Some(EntityRef::new("user_alice")),
        creator: Some(EntityRef::new("user_bob")),
        team: Some(EntityRef::new("team_eng")),
        project: Some(EntityRef::new("project_apollo")),
        parent: None,
        cycle: Some(EntityRef::new("cycle_4")),
    };
    let issue_2 = Issue {
        id: "issue_2".to_string(),
        identifier: "ENG-2".to_string(),
        title: "Audit token refresh".to_string(),
        description: None,
        priority: 3,
        priority_label: Some("Normal".to_string()),
        estimate: None,
        due_date: None,
        url: "https://tracker.example/issue/ENG-2".to_string(),
        created_at: now,
        updated_at: now,
        state: Some(EntityRef::new("state_backlog")),
        assignee: None,
        creator: Some(EntityRef::new("user_alice")),
        team: Some(EntityRef::new("team_eng")),
        project: None,
        parent: Some(EntityRef::new("issue_1")),
        cycle: None,
    };
    data.issue_label_ids
        .insert(issue_1.id.clone(), vec!["label_bug".to_string()]);
    data.issues.insert(issue_1.id.clone(), issue_1);
    data.issues.insert(issue_2.id.clone(), issue_2);
    data.issue_counters.insert("team_eng".to_string(), 2);

    data.comments.insert(
        "issue_1".to_string(),
        vec![Comment {
            id: "comment_1".to_string(),
            body: "Reproduced on staging.".to_string(),
            user: Some(EntityRef::new("user_bob")),
            created_at: now,
            updated_at: now,
        }],
    );
    data.attachments.insert(
        "issue_1".to_string(),
        vec![Attachment {
            id: "attachment_1".to_string(),
            title: "Session trace".to_string(),
            subtitle: Some("datadog".to_string()),
            url: "https://logs.example/trace/123".to_string(),
            creator: Some(EntityRef::new("user_bob")),
            created_at: now,
        }],
    );

    data.next_id = 100;
}

/// Slice a sorted node list into one page, mirroring cursor pagination
fn paginate<T: Clone>(items: &[T], page: &Page, id_of: impl Fn(&T) -> &str) -> Connection<T> {
    let start = match &page.after {
        Some(cursor) => items
            .iter()
            .position(|item| id_of(item) == cursor)
            .map(|pos| pos + 1)
            .unwrap_or(items.len()),
        None => 0,
    };
    let limit = page.limit() as usize;
    let end = (start + limit).min(items.len());
    let nodes: Vec<T> = items[start..end].to_vec();
    let page_info = PageInfo {
        has_next_page: end < items.len(),
        end_cursor: nodes.last().map(|item| id_of(item).to_string()),
    };
    Connection { nodes, page_info }
}

fn sorted_by_id<T: Clone>(map: &HashMap<String, T>) -> Vec<T> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    keys.iter().map(|k| map[*k].clone()).collect()
}

impl MockData {
    fn issue(&self, id: &str) -> Result<Issue> {
        self.issues
            .get(id)
            .cloned()
            .ok_or_else(|| TrackbridgeError::not_found("issue", id))
    }

    fn team(&self, id: &str) -> Result<Team> {
        self.teams
            .get(id)
            .cloned()
            .ok_or_else(|| TrackbridgeError::not_found("team", id))
    }

    fn user(&self, id: &str) -> Result<User> {
        self.users
            .get(id)
            .cloned()
            .ok_or_else(|| TrackbridgeError::not_found("user", id))
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}_{}", self.next_id)
    }
}

#[async_trait]
impl Tracker for MockTracker {
    async fn viewer(&self) -> Result<User> {
        self.check_read().await?;
        let data = self.data.read().await;
        let viewer_id = data.viewer_id.clone();
        data.user(&viewer_id)
    }

    async fn user(&self, id: &str) -> Result<User> {
        self.check_read().await?;
        self.data.read().await.user(id)
    }

    async fn users(&self, page: Page) -> Result<Connection<User>> {
        self.check_read().await?;
        let data = self.data.read().await;
        Ok(paginate(&sorted_by_id(&data.users), &page, |u| &u.id))
    }

    async fn team(&self, id: &str) -> Result<Team> {
        self.check_read().await?;
        self.data.read().await.team(id)
    }

    async fn teams(&self, page: Page) -> Result<Connection<Team>> {
        self.check_read().await?;
        let data = self.data.read().await;
        Ok(paginate(&sorted_by_id(&data.teams), &page, |t| &t.id))
    }

    async fn team_states(&self, team_id: &str) -> Result<Vec<WorkflowState>> {
        self.check_read().await?;
        let data = self.data.read().await;
        data.team(team_id)?;
        let mut states: Vec<WorkflowState> = data.states.values().cloned().collect();
        states.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(states)
    }

    async fn team_members(&self, team_id: &str) -> Result<Vec<User>> {
        self.check_read().await?;
        let data = self.data.read().await;
        data.team(team_id)?;
        Ok(sorted_by_id(&data.users))
    }

    async fn workflow_state(&self, id: &str) -> Result<WorkflowState> {
        self.check_read().await?;
        self.data
            .read()
            .await
            .states
            .get(id)
            .cloned()
            .ok_or_else(|| TrackbridgeError::not_found("workflow state", id))
    }

    async fn issue(&self, id: &str) -> Result<Issue> {
        self.check_read().await?;
        self.data.read().await.issue(id)
    }

    async fn issues(&self, filter: IssueFilter, page: Page) -> Result<Connection<Issue>> {
        self.check_read().await?;
        let data = self.data.read().await;
        let matches = |issue: &Issue| {
            let edge_matches = |edge: &Option<EntityRef>, want: &Option<String>| match want {
                Some(id) => edge.as_ref().is_some_and(|e| &e.id == id),
                None => true,
            };
            edge_matches(&issue.team, &filter.team_id)
                && edge_matches(&issue.assignee, &filter.assignee_id)
                && edge_matches(&issue.state, &filter.state_id)
                && edge_matches(&issue.project, &filter.project_id)
                && match &filter.label_id {
                    Some(label_id) => data
                        .issue_label_ids
                        .get(&issue.id)
                        .is_some_and(|ids| ids.contains(label_id)),
                    None => true,
                }
        };
        let nodes: Vec<Issue> = sorted_by_id(&data.issues)
            .into_iter()
            .filter(|i| matches(i))
            .collect();
        Ok(paginate(&nodes, &page, |i| &i.id))
    }

    async fn search_issues(&self, query: &str, page: Page) -> Result<Connection<Issue>> {
        self.check_read().await?;
        let data = self.data.read().await;
        let needle = query.to_lowercase();
        let nodes: Vec<Issue> = sorted_by_id(&data.issues)
            .into_iter()
            .filter(|issue| {
                issue.title.to_lowercase().contains(&needle)
                    || issue
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect();
        Ok(paginate(&nodes, &page, |i| &i.id))
    }

    async fn issue_labels(&self, issue_id: &str) -> Result<Vec<IssueLabel>> {
        self.check_read().await?;
        let data = self.data.read().await;
        data.issue(issue_id)?;
        let ids = data.issue_label_ids.get(issue_id).cloned().unwrap_or_default();
        Ok(ids
            .iter()
            .filter_map(|id| data.labels.get(id).cloned())
            .collect())
    }

    async fn issue_comments(&self, issue_id: &str) -> Result<Vec<Comment>> {
        self.check_read().await?;
        let data = self.data.read().await;
        data.issue(issue_id)?;
        Ok(data.comments.get(issue_id).cloned().unwrap_or_default())
    }

    async fn issue_attachments(&self, issue_id: &str) -> Result<Vec<Attachment>> {
        self.check_read().await?;
        let data = self.data.read().await;
        data.issue(issue_id)?;
        Ok(data.attachments.get(issue_id).cloned().unwrap_or_default())
    }

    async fn create_issue(&self, input: CreateIssueInput) -> Result<Issue> {
        self.check_mutation().await?;
        let mut data = self.data.write().await;
        let team = data.team(&input.team_id)?;
        if let Some(state_id) = &input.state_id {
            if !data.states.contains_key(state_id) {
                return Err(TrackbridgeError::not_found("workflow state", state_id));
            }
        }
        if let Some(assignee_id) = &input.assignee_id {
            data.user(assignee_id)?;
        }
        if let Some(parent_id) = &input.parent_id {
            data.issue(parent_id)?;
        }

        let number = {
            let counter = data.issue_counters.entry(team.id.clone()).or_insert(0);
            *counter += 1;
            *counter
        };
        let id = data.fresh_id("issue");
        let identifier = format!("{}-{}", team.key, number);
        let now = fixture_time();

        let issue = Issue {
            id: id.clone(),
            identifier: identifier.clone(),
            title: input.title,
            description: input.description,
            priority: input.priority.unwrap_or(0),
            priority_label: None,
            estimate: input.estimate,
            due_date: input.due_date,
            url: format!("https://tracker.example/issue/{identifier}"),
            created_at: now,
            updated_at: now,
            state: input.state_id.map(EntityRef::new),
            assignee: input.assignee_id.map(EntityRef::new),
            creator: Some(EntityRef::new(data.viewer_id.clone())),
            team: Some(EntityRef::new(team.id)),
            project: None,
            parent: input.parent_id.map(EntityRef::new),
            cycle: None,
        };
        if let Some(label_ids) = input.label_ids {
            data.issue_label_ids.insert(id.clone(), label_ids);
        }
        data.issues.insert(id, issue.clone());
        Ok(issue)
    }

    async fn update_issue(&self, id: &str, input: UpdateIssueInput) -> Result<Issue> {
        self.check_mutation().await?;
        let mut data = self.data.write().await;
        let mut issue = data.issue(id)?;

        if let Some(title) = input.title {
            issue.title = title;
        }
        if let Some(description) = input.description {
            issue.description = Some(description);
        }
        if let Some(priority) = input.priority {
            issue.priority = priority;
        }
        if let Some(state_id) = input.state_id {
            if !data.states.contains_key(&state_id) {
                return Err(TrackbridgeError::not_found("workflow state", state_id));
            }
            issue.state = Some(EntityRef::new(state_id));
        }
        if let Some(assignee_id) = input.assignee_id {
            data.user(&assignee_id)?;
            issue.assignee = Some(EntityRef::new(assignee_id));
        }
        if let Some(label_ids) = input.label_ids {
            data.issue_label_ids.insert(id.to_string(), label_ids);
        }
        if let Some(estimate) = input.estimate {
            issue.estimate = Some(estimate);
        }
        if let Some(due_date) = input.due_date {
            issue.due_date = Some(due_date);
        }

        data.issues.insert(id.to_string(), issue.clone());
        Ok(issue)
    }

    async fn set_issue_parent(&self, id: &str, parent_id: Option<&str>) -> Result<Issue> {
        self.check_mutation().await?;
        let mut data = self.data.write().await;
        let mut issue = data.issue(id)?;
        match parent_id {
            Some(parent_id) => {
                data.issue(parent_id)?;
                issue.parent = Some(EntityRef::new(parent_id));
            }
            None => issue.parent = None,
        }
        data.issues.insert(id.to_string(), issue.clone());
        Ok(issue)
    }

    async fn project(&self, id: &str) -> Result<Project> {
        self.check_read().await?;
        self.data
            .read()
            .await
            .projects
            .get(id)
            .cloned()
            .ok_or_else(|| TrackbridgeError::not_found("project", id))
    }

    async fn projects(&self, page: Page) -> Result<Connection<Project>> {
        self.check_read().await?;
        let data = self.data.read().await;
        Ok(paginate(&sorted_by_id(&data.projects), &page, |p| &p.id))
    }

    async fn project_teams(&self, project_id: &str) -> Result<Vec<Team>> {
        self.check_read().await?;
        let data = self.data.read().await;
        if !data.projects.contains_key(project_id) {
            return Err(TrackbridgeError::not_found("project", project_id));
        }
        Ok(sorted_by_id(&data.teams))
    }

    async fn create_project(&self, input: CreateProjectInput) -> Result<Project> {
        self.check_mutation().await?;
        let mut data = self.data.write().await;
        for team_id in &input.team_ids {
            data.team(team_id)?;
        }
        let id = data.fresh_id("project");
        let now = fixture_time();
        let project = Project {
            id: id.clone(),
            name: input.name.clone(),
            description: input.description.unwrap_or_default(),
            state: input.state.unwrap_or_else(|| "planned".to_string()),
            progress: 0.0,
            start_date: None,
            target_date: None,
            url: format!("https://tracker.example/project/{id}"),
            lead: None,
            created_at: now,
            updated_at: now,
        };
        data.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn labels(&self, team_id: Option<&str>, page: Page) -> Result<Connection<IssueLabel>> {
        self.check_read().await?;
        let data = self.data.read().await;
        let nodes: Vec<IssueLabel> = sorted_by_id(&data.labels)
            .into_iter()
            .filter(|label| match team_id {
                Some(team_id) => label.team.as_ref().is_some_and(|t| t.id == team_id),
                None => true,
            })
            .collect();
        Ok(paginate(&nodes, &page, |l| &l.id))
    }

    async fn create_label(&self, input: CreateLabelInput) -> Result<IssueLabel> {
        self.check_mutation().await?;
        let mut data = self.data.write().await;
        data.team(&input.team_id)?;
        let id = data.fresh_id("label");
        let label = IssueLabel {
            id: id.clone(),
            name: input.name,
            color: input.color.unwrap_or_else(|| "#95a2b3".to_string()),
            description: input.description,
            team: Some(EntityRef::new(input.team_id)),
        };
        data.labels.insert(id, label.clone());
        Ok(label)
    }

    async fn cycle(&self, id: &str) -> Result<Cycle> {
        self.check_read().await?;
        self.data
            .read()
            .await
            .cycles
            .get(id)
            .cloned()
            .ok_or_else(|| TrackbridgeError::not_found("cycle", id))
    }

    async fn cycles(&self, team_id: &str, page: Page) -> Result<Connection<Cycle>> {
        self.check_read().await?;
        let data = self.data.read().await;
        data.team(team_id)?;
        let nodes: Vec<Cycle> = sorted_by_id(&data.cycles)
            .into_iter()
            .filter(|cycle| cycle.team.id == team_id)
            .collect();
        Ok(paginate(&nodes, &page, |c| &c.id))
    }

    async fn cycle_issues(&self, cycle_id: &str) -> Result<Vec<Issue>> {
        self.check_read().await?;
        let data = self.data.read().await;
        if !data.cycles.contains_key(cycle_id) {
            return Err(TrackbridgeError::not_found("cycle", cycle_id));
        }
        Ok(sorted_by_id(&data.issues)
            .into_iter()
            .filter(|issue| issue.cycle.as_ref().is_some_and(|c| c.id == cycle_id))
            .collect())
    }

    async fn create_comment(&self, input: CreateCommentInput) -> Result<Comment> {
        self.check_mutation().await?;
        let mut data = self.data.write().await;
        data.issue(&input.issue_id)?;
        let id = data.fresh_id("comment");
        let now = fixture_time();
        let comment = Comment {
            id,
            body: input.body,
            user: Some(EntityRef::new(data.viewer_id.clone())),
            created_at: now,
            updated_at: now,
        };
        data.comments
            .entry(input.issue_id)
            .or_default()
            .push(comment.clone());
        Ok(comment)
    }

    async fn create_attachment(&self, input: CreateAttachmentInput) -> Result<Attachment> {
        self.check_mutation().await?;
        let mut data = self.data.write().await;
        data.issue(&input.issue_id)?;
        let id = data.fresh_id("attachment");
        let attachment = Attachment {
            id,
            title: input.title,
            subtitle: input.subtitle,
            url: input.url,
            creator: Some(EntityRef::new(data.viewer_id.clone())),
            created_at: fixture_time(),
        };
        data.attachments
            .entry(input.issue_id)
            .or_default()
            .push(attachment.clone());
        Ok(attachment)
    }

    async fn user_assigned_issues(&self, user_id: &str, page: Page) -> Result<Connection<Issue>> {
        self.check_read().await?;
        let data = self.data.read().await;
        data.user(user_id)?;
        let nodes: Vec<Issue> = sorted_by_id(&data.issues)
            .into_iter()
            .filter(|issue| issue.assignee.as_ref().is_some_and(|a| a.id == user_id))
            .collect();
        Ok(paginate(&nodes, &page, |i| &i.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_lookup() {
        let tracker = MockTracker::with_fixtures();
        let issue = tracker.issue("issue_1").await.unwrap();
        assert_eq!(issue.identifier, "ENG-1");
        assert_eq!(issue.state.as_ref().unwrap().id, "state_started");
    }

    #[tokio::test]
    async fn test_unknown_issue_is_not_found() {
        let tracker = MockTracker::with_fixtures();
        let err = tracker.issue("nope").await.unwrap_err();
        assert!(matches!(err, TrackbridgeError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_issue_assigns_identifier() {
        let tracker = MockTracker::with_fixtures();
        let issue = tracker
            .create_issue(CreateIssueInput {
                team_id: "team_eng".to_string(),
                title: "New issue".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(issue.identifier, "ENG-3");
        assert_eq!(issue.creator.as_ref().unwrap().id, "user_alice");
    }

    #[tokio::test]
    async fn test_create_issue_unknown_team() {
        let tracker = MockTracker::with_fixtures();
        let err = tracker
            .create_issue(CreateIssueInput {
                team_id: "team_nope".to_string(),
                title: "x".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TrackbridgeError::NotFound { entity: "team", .. }
        ));
    }

    #[tokio::test]
    async fn test_set_parent_and_detach() {
        let tracker = MockTracker::with_fixtures();
        let detached = tracker.set_issue_parent("issue_2", None).await.unwrap();
        assert!(detached.parent.is_none());

        let attached = tracker
            .set_issue_parent("issue_2", Some("issue_1"))
            .await
            .unwrap();
        assert_eq!(attached.parent.as_ref().unwrap().id, "issue_1");
    }

    #[tokio::test]
    async fn test_issue_filter_by_assignee() {
        let tracker = MockTracker::with_fixtures();
        let filter = IssueFilter {
            assignee_id: Some("user_alice".to_string()),
            ..Default::default()
        };
        let connection = tracker.issues(filter, Page::default()).await.unwrap();
        assert_eq!(connection.nodes.len(), 1);
        assert_eq!(connection.nodes[0].id, "issue_1");
    }

    #[tokio::test]
    async fn test_pagination_window() {
        let tracker = MockTracker::with_fixtures();
        let page = Page {
            first: Some(1),
            after: None,
        };
        let first_page = tracker.issues(IssueFilter::default(), page).await.unwrap();
        assert_eq!(first_page.nodes.len(), 1);
        assert!(first_page.page_info.has_next_page);

        let page = Page {
            first: Some(1),
            after: first_page.page_info.end_cursor.clone(),
        };
        let second_page = tracker.issues(IssueFilter::default(), page).await.unwrap();
        assert_eq!(second_page.nodes.len(), 1);
        assert!(!second_page.page_info.has_next_page);
        assert_ne!(first_page.nodes[0].id, second_page.nodes[0].id);
    }

    #[tokio::test]
    async fn test_search_matches_title_and_description() {
        let tracker = MockTracker::with_fixtures();
        let by_title = tracker
            .search_issues("login", Page::default())
            .await
            .unwrap();
        assert_eq!(by_title.nodes.len(), 1);

        let by_description = tracker
            .search_issues("logged out", Page::default())
            .await
            .unwrap();
        assert_eq!(by_description.nodes.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_toggles() {
        let tracker = MockTracker::with_fixtures();
        tracker.fail_reads(true).await;
        assert!(tracker.issue("issue_1").await.is_err());

        tracker.fail_reads(false).await;
        tracker.fail_mutations(true).await;
        assert!(tracker
            .create_comment(CreateCommentInput {
                issue_id: "issue_1".to_string(),
                body: "x".to_string(),
            })
            .await
            .is_err());
        assert!(tracker.issue("issue_1").await.is_ok());
    }
}
