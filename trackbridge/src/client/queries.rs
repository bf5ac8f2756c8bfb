//! GraphQL documents sent to the remote tracker
//!
//! Selections are kept minimal: relation edges select only `id`, matching
//! the id-only [`crate::models::EntityRef`] edges on the models.

/// Shared issue selection
pub const ISSUE_FRAGMENT: &str = r"
fragment IssueFields on Issue {
  id
  identifier
  title
  description
  priority
  priorityLabel
  estimate
  dueDate
  url
  createdAt
  updatedAt
  state { id }
  assignee { id }
  creator { id }
  team { id }
  project { id }
  parent { id }
  cycle { id }
}";

/// Shared user selection
pub const USER_FRAGMENT: &str = r"
fragment UserFields on User {
  id
  name
  displayName
  email
  active
  admin
  createdAt
}";

/// Shared team selection
pub const TEAM_FRAGMENT: &str = r"
fragment TeamFields on Team {
  id
  key
  name
  description
  createdAt
}";

/// Shared project selection
pub const PROJECT_FRAGMENT: &str = r"
fragment ProjectFields on Project {
  id
  name
  description
  state
  progress
  startDate
  targetDate
  url
  lead { id }
  createdAt
  updatedAt
}";

/// Shared label selection
pub const LABEL_FRAGMENT: &str = r"
fragment LabelFields on IssueLabel {
  id
  name
  color
  description
  team { id }
}";

/// Shared cycle selection
pub const CYCLE_FRAGMENT: &str = r"
fragment CycleFields on Cycle {
  id
  number
  name
  startsAt
  endsAt
  completedAt
  team { id }
}";

/// Shared workflow-state selection
pub const STATE_FRAGMENT: &str = r"
fragment StateFields on WorkflowState {
  id
  name
  type
  color
  position
}";

/// Shared page-info selection
pub const PAGE_INFO: &str = "pageInfo { hasNextPage endCursor }";

/// Compose a query document with the fragments it references
pub fn with_fragments(query: &str, fragments: &[&str]) -> String {
    let mut doc = String::from(query);
    for fragment in fragments {
        doc.push('\n');
        doc.push_str(fragment);
    }
    doc
}

pub const ISSUE: &str = r"
query Issue($id: String!) {
  issue(id: $id) { ...IssueFields }
}";

pub const ISSUES: &str = r"
query Issues($filter: IssueFilter, $first: Int!, $after: String) {
  issues(filter: $filter, first: $first, after: $after) {
    nodes { ...IssueFields }
    pageInfo { hasNextPage endCursor }
  }
}";

pub const SEARCH_ISSUES: &str = r"
query SearchIssues($query: String!, $first: Int!, $after: String) {
  issueSearch(query: $query, first: $first, after: $after) {
    nodes { ...IssueFields }
    pageInfo { hasNextPage endCursor }
  }
}";

pub const ISSUE_LABELS: &str = r"
query IssueLabels($id: String!) {
  issue(id: $id) {
    labels(first: 250) { nodes { ...LabelFields } }
  }
}";

pub const ISSUE_COMMENTS: &str = r"
query IssueComments($id: String!) {
  issue(id: $id) {
    comments(first: 250) {
      nodes { id body user { id } createdAt updatedAt }
    }
  }
}";

pub const ISSUE_ATTACHMENTS: &str = r"
query IssueAttachments($id: String!) {
  issue(id: $id) {
    attachments(first: 250) {
      nodes { id title subtitle url creator { id } createdAt }
    }
  }
}";

pub const CREATE_ISSUE: &str = r"
mutation CreateIssue($input: IssueCreateInput!) {
  issueCreate(input: $input) {
    success
    issue { ...IssueFields }
  }
}";

pub const UPDATE_ISSUE: &str = r"
mutation UpdateIssue($id: String!, $input: IssueUpdateInput!) {
  issueUpdate(id: $id, input: $input) {
    success
    issue { ...IssueFields }
  }
}";

pub const VIEWER: &str = r"
query Viewer {
  viewer { ...UserFields }
}";

pub const USER: &str = r"
query User($id: String!) {
  user(id: $id) { ...UserFields }
}";

pub const USERS: &str = r"
query Users($first: Int!, $after: String) {
  users(first: $first, after: $after) {
    nodes { ...UserFields }
    pageInfo { hasNextPage endCursor }
  }
}";

pub const USER_ASSIGNED_ISSUES: &str = r"
query UserAssignedIssues($id: String!, $first: Int!, $after: String) {
  user(id: $id) {
    assignedIssues(first: $first, after: $after) {
      nodes { ...IssueFields }
      pageInfo { hasNextPage endCursor }
    }
  }
}";

pub const TEAM: &str = r"
query Team($id: String!) {
  team(id: $id) { ...TeamFields }
}";

pub const TEAMS: &str = r"
query Teams($first: Int!, $after: String) {
  teams(first: $first, after: $after) {
    nodes { ...TeamFields }
    pageInfo { hasNextPage endCursor }
  }
}";

pub const TEAM_STATES: &str = r"
query TeamStates($id: String!) {
  team(id: $id) {
    states(first: 250) { nodes { ...StateFields } }
  }
}";

pub const TEAM_MEMBERS: &str = r"
query TeamMembers($id: String!) {
  team(id: $id) {
    members(first: 250) { nodes { ...UserFields } }
  }
}";

pub const WORKFLOW_STATE: &str = r"
query State($id: String!) {
  workflowState(id: $id) { ...StateFields }
}";

pub const PROJECT: &str = r"
query Project($id: String!) {
  project(id: $id) { ...ProjectFields }
}";

pub const PROJECTS: &str = r"
query Projects($first: Int!, $after: String) {
  projects(first: $first, after: $after) {
    nodes { ...ProjectFields }
    pageInfo { hasNextPage endCursor }
  }
}";

pub const PROJECT_TEAMS: &str = r"
query ProjectTeams($id: String!) {
  project(id: $id) {
    teams(first: 250) { nodes { ...TeamFields } }
  }
}";

pub const CREATE_PROJECT: &str = r"
mutation CreateProject($input: ProjectCreateInput!) {
  projectCreate(input: $input) {
    success
    project { ...ProjectFields }
  }
}";

pub const LABELS: &str = r"
query Labels($filter: IssueLabelFilter, $first: Int!, $after: String) {
  issueLabels(filter: $filter, first: $first, after: $after) {
    nodes { ...LabelFields }
    pageInfo { hasNextPage endCursor }
  }
}";

pub const CREATE_LABEL: &str = r"
mutation CreateLabel($input: IssueLabelCreateInput!) {
  issueLabelCreate(input: $input) {
    success
    issueLabel { ...LabelFields }
  }
}";

pub const CYCLE: &str = r"
query Cycle($id: String!) {
  cycle(id: $id) { ...CycleFields }
}";

pub const CYCLES: &str = r"
query Cycles($id: String!, $first: Int!, $after: String) {
  team(id: $id) {
    cycles(first: $first, after: $after) {
      nodes { ...CycleFields }
      pageInfo { hasNextPage endCursor }
    }
  }
}";

pub const CYCLE_ISSUES: &str = r"
query CycleIssues($id: String!) {
  cycle(id: $id) {
    issues(first: 250) { nodes { ...IssueFields } }
  }
}";

pub const CREATE_COMMENT: &str = r"
mutation CreateComment($input: CommentCreateInput!) {
  commentCreate(input: $input) {
    success
    comment { id body user { id } createdAt updatedAt }
  }
}";

pub const CREATE_ATTACHMENT: &str = r"
mutation CreateAttachment($input: AttachmentCreateInput!) {
  attachmentCreate(input: $input) {
    success
    attachment { id title subtitle url creator { id } createdAt }
  }
}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_fragments_appends_all() {
        let doc = with_fragments(ISSUE, &[ISSUE_FRAGMENT]);
        assert!(doc.contains("query Issue"));
        assert!(doc.contains("fragment IssueFields on Issue"));
    }

    #[test]
    fn test_fragments_cover_referenced_names() {
        // Every query referencing ...XxxFields must be paired with its
        // fragment by the client; spot-check the fragment names line up.
        assert!(ISSUE_FRAGMENT.contains("fragment IssueFields"));
        assert!(USER_FRAGMENT.contains("fragment UserFields"));
        assert!(TEAM_FRAGMENT.contains("fragment TeamFields"));
        assert!(PROJECT_FRAGMENT.contains("fragment ProjectFields"));
        assert!(LABEL_FRAGMENT.contains("fragment LabelFields"));
        assert!(CYCLE_FRAGMENT.contains("fragment CycleFields"));
        assert!(STATE_FRAGMENT.contains("fragment StateFields"));
    }
}
