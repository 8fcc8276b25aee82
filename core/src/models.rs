/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! JSON resources served by the API and their mapping onto the stored rows.
//!
//! Rows are flat: the embedded users of issues and comments live in prefixed
//! columns and child collections are ordered by a `position` column.

use chrono::{DateTime, Utc};
use entity::issue::Labels;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use super::input::{InputError, require_field};
use super::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub web_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub title: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    pub authored_date: DateTime<Utc>,
    pub web_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub body: String,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub author: User,
    pub assignee: Option<User>,
    #[serde(default)]
    pub votes: i32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub web_url: String,
    pub commits: Vec<Commit>,
    pub issues: Vec<Issue>,
}

/// Body of project create and update requests.
///
/// Scalars are optional here so that a missing field is reported as a
/// validation error instead of a deserialization failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub web_url: Option<String>,
    pub commits: Option<Vec<Commit>>,
    pub issues: Option<Vec<Issue>>,
}

impl ProjectPayload {
    /// Validates the payload and builds the project to store. `id` overrides
    /// the payload id; creation passes `None` and requires the client id.
    pub fn into_project(self, id: Option<String>) -> Result<Project, InputError> {
        let id = match id {
            Some(id) => id,
            None => require_field("id", self.id)?,
        };

        Ok(Project {
            id,
            name: require_field("name", self.name)?,
            web_url: require_field("web_url", self.web_url)?,
            commits: self.commits.unwrap_or_default(),
            issues: self.issues.unwrap_or_default(),
        })
    }
}

impl Project {
    pub fn from_model(project: MProject, commits: Vec<Commit>, issues: Vec<Issue>) -> Self {
        Project {
            id: project.id,
            name: project.name,
            web_url: project.web_url,
            commits,
            issues,
        }
    }

    pub fn to_active(&self) -> AProject {
        AProject {
            id: Set(self.id.clone()),
            name: Set(self.name.clone()),
            web_url: Set(self.web_url.clone()),
        }
    }
}

impl From<MCommit> for Commit {
    fn from(commit: MCommit) -> Self {
        Commit {
            id: commit.id,
            title: commit.title,
            message: commit.message,
            author_name: commit.author_name,
            author_email: commit.author_email,
            authored_date: commit.authored_date,
            web_url: commit.web_url,
        }
    }
}

impl Commit {
    pub fn into_active(self, project: &str, position: usize) -> ACommit {
        ACommit {
            id: Set(self.id),
            project: Set(project.to_string()),
            position: Set(position as i32),
            title: Set(self.title),
            message: Set(self.message),
            author_name: Set(self.author_name),
            author_email: Set(self.author_email),
            authored_date: Set(self.authored_date),
            web_url: Set(self.web_url),
        }
    }
}

impl From<MComment> for Comment {
    fn from(comment: MComment) -> Self {
        Comment {
            id: comment.id,
            body: comment.body,
            author: User {
                id: comment.author_id,
                username: comment.author_username,
                name: comment.author_name,
                avatar_url: comment.author_avatar_url,
                web_url: comment.author_web_url,
            },
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl Comment {
    pub fn into_active(self, issue: &str, position: usize) -> AComment {
        AComment {
            id: Set(self.id),
            issue: Set(issue.to_string()),
            position: Set(position as i32),
            body: Set(self.body),
            author_id: Set(self.author.id),
            author_username: Set(self.author.username),
            author_name: Set(self.author.name),
            author_avatar_url: Set(self.author.avatar_url),
            author_web_url: Set(self.author.web_url),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}

impl Issue {
    pub fn from_model(issue: MIssue, comments: Vec<Comment>) -> Self {
        // An assignee exists exactly when its id column is set.
        let assignee = issue.assignee_id.map(|id| User {
            id,
            username: issue.assignee_username.unwrap_or_default(),
            name: issue.assignee_name,
            avatar_url: issue.assignee_avatar_url.unwrap_or_default(),
            web_url: issue.assignee_web_url.unwrap_or_default(),
        });

        Issue {
            id: issue.id,
            title: issue.title,
            description: issue.description,
            state: issue.state,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
            closed_at: issue.closed_at,
            labels: issue.labels.0,
            author: User {
                id: issue.author_id,
                username: issue.author_username,
                name: issue.author_name,
                avatar_url: issue.author_avatar_url,
                web_url: issue.author_web_url,
            },
            assignee,
            votes: issue.votes,
            comments,
        }
    }

    /// Splits the issue into its row and the rows of its comments.
    pub fn into_active(self, project: &str, position: usize) -> (AIssue, Vec<AComment>) {
        let comments = self
            .comments
            .into_iter()
            .enumerate()
            .map(|(position, comment)| comment.into_active(&self.id, position))
            .collect();

        let assignee = self.assignee;

        let issue = AIssue {
            id: Set(self.id),
            project: Set(project.to_string()),
            position: Set(position as i32),
            title: Set(self.title),
            description: Set(self.description),
            state: Set(self.state),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
            closed_at: Set(self.closed_at),
            labels: Set(Labels(self.labels)),
            author_id: Set(self.author.id),
            author_username: Set(self.author.username),
            author_name: Set(self.author.name),
            author_avatar_url: Set(self.author.avatar_url),
            author_web_url: Set(self.author.web_url),
            assignee_id: Set(assignee.as_ref().map(|a| a.id.clone())),
            assignee_username: Set(assignee.as_ref().map(|a| a.username.clone())),
            assignee_name: Set(assignee.as_ref().and_then(|a| a.name.clone())),
            assignee_avatar_url: Set(assignee.as_ref().map(|a| a.avatar_url.clone())),
            assignee_web_url: Set(assignee.map(|a| a.web_url)),
            votes: Set(self.votes),
        };

        (issue, comments)
    }
}
