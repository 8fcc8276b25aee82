/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gitminer_core::models::{Project, ProjectPayload};
use gitminer_core::repository::projects::{
    delete_project as remove_project, get_project as find_project, get_project_by_name,
    list_projects, save_project, update_project,
};
use gitminer_core::types::*;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize, Debug)]
pub struct ProjectQuery {
    pub name: Option<String>,
}

/// Lists all projects, or returns the single project named by `?name=`.
pub async fn get(
    state: State<Arc<ServerState>>,
    query: Result<Query<ProjectQuery>, QueryRejection>,
) -> WebResult<Response> {
    let Query(query) = query?;

    if let Some(name) = query.name {
        let project = get_project_by_name(&state.db, &name)
            .await?
            .ok_or_else(|| WebError::not_found("Project"))?;

        return Ok(Json(project).into_response());
    }

    let projects = list_projects(&state.db).await?;

    Ok(Json(projects).into_response())
}

/// Stores the project under its client-supplied id. A project with the same
/// id is overwritten along with its commits and issues.
pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> WebResult<(StatusCode, Json<Project>)> {
    let Json(body) = payload?;
    let project = body.into_project(None)?;

    let project = save_project(&state.db, project).await?;

    tracing::info!(
        project = %project.id,
        commits = project.commits.len(),
        issues = project.issues.len(),
        "Project saved"
    );

    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Path(project_id): Path<String>,
) -> WebResult<Json<Project>> {
    let project = find_project(&state.db, &project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    Ok(Json(project))
}

pub async fn put_project(
    state: State<Arc<ServerState>>,
    Path(project_id): Path<String>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> WebResult<StatusCode> {
    let Json(body) = payload?;

    if body.id.as_deref().is_some_and(|id| id != project_id) {
        tracing::warn!(
            project = %project_id,
            "Ignoring id change in project update"
        );
    }

    let project = body.into_project(Some(project_id.clone()))?;

    if !update_project(&state.db, &project_id, project).await? {
        return Err(WebError::not_found("Project"));
    }

    tracing::info!(project = %project_id, "Project updated");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_project(
    state: State<Arc<ServerState>>,
    Path(project_id): Path<String>,
) -> WebResult<StatusCode> {
    if !remove_project(&state.db, &project_id).await? {
        return Err(WebError::not_found("Project"));
    }

    tracing::info!(project = %project_id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
