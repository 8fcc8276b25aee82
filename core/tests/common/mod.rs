/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use gitminer_core::database::connect_db;
use gitminer_core::models::*;
use gitminer_core::types::*;
use sea_orm::DatabaseConnection;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 8080,
        database_url: Some("sqlite::memory:".to_string()),
        database_url_file: None,
        // A second connection would open a second, empty in-memory database.
        database_max_connections: 1,
    }
}

pub async fn create_test_db() -> DatabaseConnection {
    connect_db(&create_mock_cli()).await.unwrap()
}

pub fn time(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, day, hour, 0, 0).unwrap()
}

pub fn user(id: &str, username: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        name: None,
        avatar_url: format!("https://avatars.githubusercontent.com/u/{id}"),
        web_url: format!("https://api.github.com/users/{username}"),
    }
}

pub fn commit(id: &str) -> Commit {
    Commit {
        id: id.to_string(),
        title: format!("Commit {id}"),
        message: "\n\nNew extension point".to_string(),
        author_name: "Henry Coles".to_string(),
        author_email: "henry@pitest.org".to_string(),
        authored_date: time(12, 9),
        web_url: format!("https://github.com/hcoles/pitest/commit/{id}"),
    }
}

pub fn comment(id: &str, author: User) -> Comment {
    Comment {
        id: id.to_string(),
        body: "Thanks!".to_string(),
        author,
        created_at: time(20, 18),
        updated_at: time(20, 18),
    }
}

pub fn issue(id: &str, state: &str, author: User, comments: Vec<Comment>) -> Issue {
    Issue {
        id: id.to_string(),
        title: format!("Issue {id}"),
        description: None,
        state: state.to_string(),
        created_at: time(18, 12),
        updated_at: time(20, 18),
        closed_at: None,
        labels: Vec::new(),
        author,
        assignee: None,
        votes: 0,
        comments,
    }
}

pub fn project(id: &str, name: &str, commits: Vec<Commit>, issues: Vec<Issue>) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        web_url: format!("https://github.com/hcoles/{name}"),
        commits,
        issues,
    }
}
