/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::{Path, State};
use gitminer_core::models::Commit;
use gitminer_core::repository::commits::{get_commit as find_commit, list_commits};
use gitminer_core::types::*;
use std::sync::Arc;

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<Commit>>> {
    Ok(Json(list_commits(&state.db).await?))
}

pub async fn get_commit(
    state: State<Arc<ServerState>>,
    Path(commit_id): Path<String>,
) -> WebResult<Json<Commit>> {
    let commit = find_commit(&state.db, &commit_id)
        .await?
        .ok_or_else(|| WebError::not_found("Commit"))?;

    Ok(Json(commit))
}
