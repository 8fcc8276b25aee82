/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use gitminer_core::models::Comment;
use gitminer_core::repository::comments::{
    get_comment as find_comment, get_comments_by_author, list_comments,
};
use gitminer_core::types::*;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentQuery {
    pub author_id: Option<String>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    query: Result<Query<CommentQuery>, QueryRejection>,
) -> WebResult<Json<Vec<Comment>>> {
    let Query(query) = query?;

    let Some(author_id) = query.author_id else {
        return Ok(Json(list_comments(&state.db).await?));
    };

    // A filter without matches is reported as not found, not as an empty list.
    let comments = get_comments_by_author(&state.db, &author_id).await?;
    if comments.is_empty() {
        return Err(WebError::not_found("Comment"));
    }

    Ok(Json(comments))
}

pub async fn get_comment(
    state: State<Arc<ServerState>>,
    Path(comment_id): Path<String>,
) -> WebResult<Json<Comment>> {
    let comment = find_comment(&state.db, &comment_id)
        .await?
        .ok_or_else(|| WebError::not_found("Comment"))?;

    Ok(Json(comment))
}
