/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use gitminer_core::database::connect_db;
use gitminer_core::types::*;
use serde_json::{Value, json};
use std::sync::Arc;
use web::create_router;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 8080,
        database_url: Some("sqlite::memory:".to_string()),
        database_url_file: None,
        database_max_connections: 1,
    }
}

pub async fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = connect_db(&cli).await.unwrap();

    Arc::new(ServerState { db, cli })
}

pub async fn create_test_server() -> TestServer {
    TestServer::new(create_router(create_mock_state().await)).unwrap()
}

pub fn user_json(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "name": null,
        "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}"),
        "web_url": format!("https://api.github.com/users/{username}"),
    })
}

pub fn commit_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Commit {id}"),
        "message": "\n\nNew extension point",
        "author_name": "Henry Coles",
        "author_email": "henry@pitest.org",
        "authored_date": "2023-01-12T09:00:00Z",
        "web_url": format!("https://github.com/hcoles/pitest/commit/{id}"),
    })
}

pub fn comment_json(id: &str, author: Value) -> Value {
    json!({
        "id": id,
        "body": "Thanks!",
        "author": author,
        "created_at": "2023-01-20T18:00:00Z",
        "updated_at": "2023-01-20T18:00:00Z",
    })
}

pub fn issue_json(id: &str, state: &str, author: Value, comments: Vec<Value>) -> Value {
    json!({
        "id": id,
        "title": format!("Issue {id}"),
        "description": "Coverage is not reported",
        "state": state,
        "created_at": "2023-01-18T12:00:00Z",
        "updated_at": "2023-01-20T18:00:00Z",
        "closed_at": null,
        "labels": ["bug"],
        "author": author,
        "assignee": null,
        "votes": 0,
        "comments": comments,
    })
}

/// A small mined project with two commits, an open issue without comments and
/// a closed issue with one comment.
pub fn pitest_json() -> Value {
    json!({
        "id": "15717393",
        "name": "pitest",
        "web_url": "https://github.com/hcoles/pitest",
        "commits": [commit_json("ee6e291"), commit_json("95e8102")],
        "issues": [
            issue_json("1556497126", "open", user_json("1891135", "hcoles"), Vec::new()),
            issue_json(
                "1537933904",
                "closed",
                user_json("1671931", "davidburstrom"),
                vec![comment_json("1398766669", user_json("1891135", "hcoles"))],
            ),
        ],
    })
}

pub async fn create_pitest(server: &TestServer) {
    server
        .post("/gitminer/projects")
        .json(&pitest_json())
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}
