/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use gitminer_core::models::{Comment, Issue};
use gitminer_core::repository::issues::{
    get_issue as find_issue, get_issue_comments as find_issue_comments, get_issues_by_author,
    get_issues_by_state, list_issues,
};
use gitminer_core::types::*;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IssueQuery {
    pub author_id: Option<String>,
    pub state: Option<String>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    query: Result<Query<IssueQuery>, QueryRejection>,
) -> WebResult<Json<Vec<Issue>>> {
    let Query(query) = query?;

    // authorId takes precedence when both filters are given.
    let issues = if let Some(author_id) = query.author_id {
        get_issues_by_author(&state.db, &author_id).await?
    } else if let Some(issue_state) = query.state {
        get_issues_by_state(&state.db, &issue_state).await?
    } else {
        return Ok(Json(list_issues(&state.db).await?));
    };

    if issues.is_empty() {
        return Err(WebError::not_found("Issue"));
    }

    Ok(Json(issues))
}

pub async fn get_issue(
    state: State<Arc<ServerState>>,
    Path(issue_id): Path<String>,
) -> WebResult<Json<Issue>> {
    let issue = find_issue(&state.db, &issue_id)
        .await?
        .ok_or_else(|| WebError::not_found("Issue"))?;

    Ok(Json(issue))
}

pub async fn get_issue_comments(
    state: State<Arc<ServerState>>,
    Path(issue_id): Path<String>,
) -> WebResult<Json<Vec<Comment>>> {
    let comments = find_issue_comments(&state.db, &issue_id)
        .await?
        .ok_or_else(|| WebError::not_found("Issue"))?;

    Ok(Json(comments))
}
