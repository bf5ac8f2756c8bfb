//! Flat JSON projections for MCP tool responses
//!
//! Every successful tool call returns one JSON object; these functions are
//! the single place deciding which fields each documented response carries.
//! Relation edges flatten to `*_id` fields on summaries; detailed views
//! embed the resolved relation records.

use serde_json::{json, Value};

use crate::models::{
    Attachment, Comment, Cycle, Issue, IssueLabel, PageInfo, Project, Team, User, WorkflowState,
};

use super::shared_utils::McpFormatter;

fn edge_id(edge: &Option<crate::models::EntityRef>) -> Value {
    match edge {
        Some(r) => json!(r.id),
        None => Value::Null,
    }
}

/// Summary projection of an issue: scalar fields plus id-only edges
pub fn issue_json(issue: &Issue) -> Value {
    json!({
        "id": issue.id,
        "identifier": issue.identifier,
        "title": issue.title,
        "description": issue.description,
        "priority": issue.priority,
        "priority_label": issue.priority_label,
        "estimate": issue.estimate,
        "due_date": issue.due_date,
        "url": issue.url,
        "created_at": McpFormatter::format_timestamp(issue.created_at),
        "updated_at": McpFormatter::format_timestamp(issue.updated_at),
        "state_id": edge_id(&issue.state),
        "assignee_id": edge_id(&issue.assignee),
        "creator_id": edge_id(&issue.creator),
        "team_id": edge_id(&issue.team),
        "project_id": edge_id(&issue.project),
        "parent_id": edge_id(&issue.parent),
        "cycle_id": edge_id(&issue.cycle),
    })
}

/// Relations resolved for a detailed issue view
#[derive(Debug, Default)]
pub struct IssueRelations {
    /// Resolved workflow state
    pub state: Option<WorkflowState>,
    /// Resolved assignee
    pub assignee: Option<User>,
    /// Resolved creator
    pub creator: Option<User>,
    /// Resolved owning team
    pub team: Option<Team>,
    /// Resolved project
    pub project: Option<Project>,
    /// Resolved parent issue
    pub parent: Option<Issue>,
    /// Resolved cycle
    pub cycle: Option<Cycle>,
    /// Labels applied to the issue
    pub labels: Vec<IssueLabel>,
    /// Comments on the issue
    pub comments: Vec<Comment>,
    /// Attachments on the issue
    pub attachments: Vec<Attachment>,
}

/// Detailed projection: the issue merged with its resolved relations
pub fn issue_detail_json(issue: &Issue, relations: &IssueRelations) -> Value {
    json!({
        "id": issue.id,
        "identifier": issue.identifier,
        "title": issue.title,
        "description": issue.description,
        "priority": issue.priority,
        "priority_label": issue.priority_label,
        "estimate": issue.estimate,
        "due_date": issue.due_date,
        "url": issue.url,
        "created_at": McpFormatter::format_timestamp(issue.created_at),
        "updated_at": McpFormatter::format_timestamp(issue.updated_at),
        "state": relations.state.as_ref().map(state_json),
        "assignee": relations.assignee.as_ref().map(user_json),
        "creator": relations.creator.as_ref().map(user_json),
        "team": relations.team.as_ref().map(team_json),
        "project": relations.project.as_ref().map(project_json),
        "parent": relations.parent.as_ref().map(|p| json!({
            "id": p.id,
            "identifier": p.identifier,
            "title": p.title,
        })),
        "cycle": relations.cycle.as_ref().map(cycle_json),
        "labels": relations.labels.iter().map(label_json).collect::<Vec<_>>(),
        "comments": relations.comments.iter().map(comment_json).collect::<Vec<_>>(),
        "attachments": relations.attachments.iter().map(attachment_json).collect::<Vec<_>>(),
    })
}

/// Projection of a workflow state
pub fn state_json(state: &WorkflowState) -> Value {
    json!({
        "id": state.id,
        "name": state.name,
        "type": state.state_type,
        "color": state.color,
    })
}

/// Projection of a team
pub fn team_json(team: &Team) -> Value {
    json!({
        "id": team.id,
        "key": team.key,
        "name": team.name,
        "description": team.description,
        "created_at": McpFormatter::format_timestamp(team.created_at),
    })
}

/// Detailed projection: team with workflow states and members
pub fn team_detail_json(team: &Team, states: &[WorkflowState], members: &[User]) -> Value {
    json!({
        "id": team.id,
        "key": team.key,
        "name": team.name,
        "description": team.description,
        "created_at": McpFormatter::format_timestamp(team.created_at),
        "states": states.iter().map(state_json).collect::<Vec<_>>(),
        "members": members.iter().map(user_json).collect::<Vec<_>>(),
    })
}

/// Projection of a project
pub fn project_json(project: &Project) -> Value {
    json!({
        "id": project.id,
        "name": project.name,
        "description": project.description,
        "state": project.state,
        "progress": project.progress,
        "start_date": project.start_date,
        "target_date": project.target_date,
        "url": project.url,
        "lead_id": edge_id(&project.lead),
        "created_at": McpFormatter::format_timestamp(project.created_at),
        "updated_at": McpFormatter::format_timestamp(project.updated_at),
    })
}

/// Detailed projection: project with its lead and teams resolved
pub fn project_detail_json(project: &Project, lead: Option<&User>, teams: &[Team]) -> Value {
    json!({
        "id": project.id,
        "name": project.name,
        "description": project.description,
        "state": project.state,
        "progress": project.progress,
        "start_date": project.start_date,
        "target_date": project.target_date,
        "url": project.url,
        "lead": lead.map(user_json),
        "teams": teams.iter().map(team_json).collect::<Vec<_>>(),
        "created_at": McpFormatter::format_timestamp(project.created_at),
        "updated_at": McpFormatter::format_timestamp(project.updated_at),
    })
}

/// Projection of a label
pub fn label_json(label: &IssueLabel) -> Value {
    json!({
        "id": label.id,
        "name": label.name,
        "color": label.color,
        "description": label.description,
        "team_id": edge_id(&label.team),
    })
}

/// Projection of a cycle
pub fn cycle_json(cycle: &Cycle) -> Value {
    json!({
        "id": cycle.id,
        "number": cycle.number,
        "name": cycle.name,
        "starts_at": McpFormatter::format_timestamp(cycle.starts_at),
        "ends_at": McpFormatter::format_timestamp(cycle.ends_at),
        "completed_at": cycle.completed_at.map(McpFormatter::format_timestamp),
        "team_id": cycle.team.id,
    })
}

/// Detailed projection: cycle with its team and scheduled issues
pub fn cycle_detail_json(cycle: &Cycle, team: &Team, issues: &[Issue]) -> Value {
    json!({
        "id": cycle.id,
        "number": cycle.number,
        "name": cycle.name,
        "starts_at": McpFormatter::format_timestamp(cycle.starts_at),
        "ends_at": McpFormatter::format_timestamp(cycle.ends_at),
        "completed_at": cycle.completed_at.map(McpFormatter::format_timestamp),
        "team": team_json(team),
        "issues": issues.iter().map(issue_json).collect::<Vec<_>>(),
        "issue_count": issues.len(),
    })
}

/// Projection of a comment
pub fn comment_json(comment: &Comment) -> Value {
    json!({
        "id": comment.id,
        "body": comment.body,
        "user_id": edge_id(&comment.user),
        "created_at": McpFormatter::format_timestamp(comment.created_at),
        "updated_at": McpFormatter::format_timestamp(comment.updated_at),
    })
}

/// Projection of an attachment
pub fn attachment_json(attachment: &Attachment) -> Value {
    json!({
        "id": attachment.id,
        "title": attachment.title,
        "subtitle": attachment.subtitle,
        "url": attachment.url,
        "creator_id": edge_id(&attachment.creator),
        "created_at": McpFormatter::format_timestamp(attachment.created_at),
    })
}

/// Projection of a user
pub fn user_json(user: &User) -> Value {
    json!({
        "id": user.id,
        "name": user.name,
        "display_name": user.display_name,
        "email": user.email,
        "active": user.active,
        "admin": user.admin,
        "created_at": McpFormatter::format_timestamp(user.created_at),
    })
}

/// Detailed projection: user with one page of their assigned issues
pub fn user_detail_json(user: &User, assigned: &[Issue], page_info: &PageInfo) -> Value {
    json!({
        "id": user.id,
        "name": user.name,
        "display_name": user.display_name,
        "email": user.email,
        "active": user.active,
        "admin": user.admin,
        "created_at": McpFormatter::format_timestamp(user.created_at),
        "assigned_issues": assigned.iter().map(issue_json).collect::<Vec<_>>(),
        "assigned_count": assigned.len(),
        "has_more_assigned": page_info.has_next_page,
    })
}

/// Wrap one page of projected nodes with pagination metadata
pub fn connection_json(key: &str, nodes: Vec<Value>, page_info: &PageInfo) -> Value {
    let count = nodes.len();
    json!({
        key: nodes,
        "count": count,
        "has_next_page": page_info.has_next_page,
        "end_cursor": page_info.end_cursor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityRef;
    use chrono::TimeZone;

    fn sample_issue() -> Issue {
        let now = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Issue {
            id: "issue_1".to_string(),
            identifier: "ENG-1".to_string(),
            title: "Title".to_string(),
            description: None,
            priority: 2,
            priority_label: Some("High".to_string()),
            estimate: None,
            due_date: None,
            url: "https://tracker.example/issue/ENG-1".to_string(),
            created_at: now,
            updated_at: now,
            state: Some(EntityRef::new("state_1")),
            assignee: None,
            creator: None,
            team: Some(EntityRef::new("team_1")),
            project: None,
            parent: None,
            cycle: None,
        }
    }

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_issue_json_exact_fields() {
        let value = issue_json(&sample_issue());
        assert_eq!(
            keys(&value),
            vec![
                "assignee_id",
                "created_at",
                "creator_id",
                "cycle_id",
                "description",
                "due_date",
                "estimate",
                "id",
                "identifier",
                "parent_id",
                "priority",
                "priority_label",
                "project_id",
                "state_id",
                "team_id",
                "title",
                "updated_at",
                "url",
            ]
        );
        assert_eq!(value["state_id"], "state_1");
        assert_eq!(value["assignee_id"], Value::Null);
    }

    #[test]
    fn test_issue_detail_json_embeds_relations() {
        let issue = sample_issue();
        let relations = IssueRelations {
            state: Some(WorkflowState {
                id: "state_1".to_string(),
                name: "In Progress".to_string(),
                state_type: "started".to_string(),
                color: "#f2c94c".to_string(),
                position: 1.0,
            }),
            ..Default::default()
        };
        let value = issue_detail_json(&issue, &relations);
        assert_eq!(value["state"]["name"], "In Progress");
        assert_eq!(value["assignee"], Value::Null);
        assert_eq!(value["labels"], json!([]));
        assert_eq!(value["comments"], json!([]));
        assert_eq!(value["attachments"], json!([]));
    }

    #[test]
    fn test_connection_json_shape() {
        let page_info = PageInfo {
            has_next_page: true,
            end_cursor: Some("issue_1".to_string()),
        };
        let value = connection_json("issues", vec![json!({ "id": "issue_1" })], &page_info);
        assert_eq!(
            keys(&value),
            vec!["count", "end_cursor", "has_next_page", "issues"]
        );
        assert_eq!(value["count"], 1);
        assert_eq!(value["has_next_page"], true);
        assert_eq!(value["end_cursor"], "issue_1");
    }

    #[test]
    fn test_user_json_exact_fields() {
        let user = User {
            id: "user_1".to_string(),
            name: "Alice".to_string(),
            display_name: None,
            email: "alice@example.com".to_string(),
            active: true,
            admin: false,
            created_at: chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };
        assert_eq!(
            keys(&user_json(&user)),
            vec![
                "active",
                "admin",
                "created_at",
                "display_name",
                "email",
                "id",
                "name",
            ]
        );
    }
}
