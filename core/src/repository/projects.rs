/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, TransactionTrait,
};
use std::collections::HashMap;

use super::issues::find_issue_rows;
use crate::consts::DB_INSERT_BATCH;
use crate::models::{Commit, Issue, Project};
use crate::types::*;

/// Nests the child collections under `projects`. `scope` is the project id
/// when a single project is loaded; otherwise every child row is read.
async fn assemble<C: ConnectionTrait>(
    db: &C,
    projects: Vec<MProject>,
    scope: Option<&str>,
) -> Result<Vec<Project>, DbErr> {
    if projects.is_empty() {
        return Ok(Vec::new());
    }

    let (commit_scope, issue_scope) = match scope {
        Some(id) => (
            Condition::all().add(CCommit::Project.eq(id)),
            Condition::all().add(CIssue::Project.eq(id)),
        ),
        None => (Condition::all(), Condition::all()),
    };

    let mut commits: HashMap<String, Vec<Commit>> = HashMap::new();
    for commit in ECommit::find()
        .filter(commit_scope)
        .order_by_asc(CCommit::Position)
        .all(db)
        .await?
    {
        commits
            .entry(commit.project.clone())
            .or_default()
            .push(commit.into());
    }

    let mut issues: HashMap<String, Vec<Issue>> = HashMap::new();
    for (issue, comments) in find_issue_rows(db, issue_scope).await? {
        issues
            .entry(issue.project.clone())
            .or_default()
            .push(Issue::from_model(issue, comments));
    }

    Ok(projects
        .into_iter()
        .map(|project| {
            let project_commits = commits.remove(&project.id).unwrap_or_default();
            let project_issues = issues.remove(&project.id).unwrap_or_default();
            Project::from_model(project, project_commits, project_issues)
        })
        .collect())
}

async fn assemble_one<C: ConnectionTrait>(
    db: &C,
    project: MProject,
) -> Result<Option<Project>, DbErr> {
    let id = project.id.clone();
    Ok(assemble(db, vec![project], Some(&id)).await?.pop())
}

pub async fn list_projects<C: ConnectionTrait>(db: &C) -> Result<Vec<Project>, DbErr> {
    let projects = EProject::find().all(db).await?;
    assemble(db, projects, None).await
}

pub async fn get_project<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<Project>, DbErr> {
    match EProject::find_by_id(id.to_string()).one(db).await? {
        Some(project) => assemble_one(db, project).await,
        None => Ok(None),
    }
}

/// Exact-name lookup. Names are expected to be unique, so several matches
/// are reported the same way as none.
pub async fn get_project_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<Project>, DbErr> {
    let mut projects = EProject::find()
        .filter(CProject::Name.eq(name))
        .limit(2)
        .all(db)
        .await?;

    if projects.len() != 1 {
        return Ok(None);
    }

    assemble_one(db, projects.remove(0)).await
}

/// Inserts `rows` with multi-row statements, keeping each statement below
/// the bind parameter limit of the backend.
async fn insert_batched<C, A>(db: &C, mut rows: Vec<A>) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    while !rows.is_empty() {
        let rest = rows.split_off(rows.len().min(DB_INSERT_BATCH));
        <A::Entity as EntityTrait>::insert_many(rows)
            .exec_without_returning(db)
            .await?;
        rows = rest;
    }

    Ok(())
}

async fn insert_children<C: ConnectionTrait>(
    db: &C,
    project: &str,
    commits: Vec<Commit>,
    issues: Vec<Issue>,
) -> Result<(), DbErr> {
    let commit_rows: Vec<ACommit> = commits
        .into_iter()
        .enumerate()
        .map(|(position, commit)| commit.into_active(project, position))
        .collect();

    let mut issue_rows: Vec<AIssue> = Vec::with_capacity(issues.len());
    let mut comment_rows: Vec<AComment> = Vec::new();
    for (position, issue) in issues.into_iter().enumerate() {
        let (aissue, acomments) = issue.into_active(project, position);
        issue_rows.push(aissue);
        comment_rows.extend(acomments);
    }

    insert_batched(db, commit_rows).await?;
    insert_batched(db, issue_rows).await?;
    insert_batched(db, comment_rows).await
}

async fn delete_children<C: ConnectionTrait>(db: &C, project: &str) -> Result<(), DbErr> {
    let issue_ids = EIssue::find()
        .select_only()
        .column(CIssue::Id)
        .filter(CIssue::Project.eq(project))
        .into_query();

    EComment::delete_many()
        .filter(CComment::Issue.in_subquery(issue_ids))
        .exec(db)
        .await?;

    EIssue::delete_many()
        .filter(CIssue::Project.eq(project))
        .exec(db)
        .await?;

    ECommit::delete_many()
        .filter(CCommit::Project.eq(project))
        .exec(db)
        .await?;

    Ok(())
}

/// Overwrites the scalars of `existing` and replaces both child collections.
async fn replace<C: ConnectionTrait>(
    db: &C,
    existing: MProject,
    project: Project,
) -> Result<(), DbErr> {
    let id = existing.id.clone();
    delete_children(db, &id).await?;

    let mut aproject: AProject = existing.into();
    aproject.name = Set(project.name);
    aproject.web_url = Set(project.web_url);
    aproject.update(db).await?;

    insert_children(db, &id, project.commits, project.issues).await
}

/// Stores the project with all of its children in one transaction. A stored
/// project with the same id is overwritten and loses its previous children.
/// Returns the project as stored.
pub async fn save_project<C>(db: &C, project: Project) -> Result<Project, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let saved = project.clone();

    let txn = db.begin().await?;

    match EProject::find_by_id(project.id.clone()).one(&txn).await? {
        Some(existing) => {
            tracing::debug!(project = %project.id, "Overwriting stored project");
            replace(&txn, existing, project).await?;
        }
        None => {
            project.to_active().insert(&txn).await?;
            insert_children(&txn, &saved.id, project.commits, project.issues).await?;
        }
    }

    txn.commit().await?;

    Ok(saved)
}

/// Overwrites the scalars of project `id` and replaces both child collections.
/// The stored id never changes. Returns `false` if the project does not exist.
pub async fn update_project<C>(db: &C, id: &str, project: Project) -> Result<bool, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let Some(existing) = EProject::find_by_id(id.to_string()).one(&txn).await? else {
        txn.rollback().await?;
        return Ok(false);
    };

    replace(&txn, existing, project).await?;
    txn.commit().await?;

    Ok(true)
}

/// Removes the project, its commits, its issues and their comments. Returns
/// `false` if the project does not exist.
pub async fn delete_project<C>(db: &C, id: &str) -> Result<bool, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    if EProject::find_by_id(id.to_string()).one(&txn).await?.is_none() {
        txn.rollback().await?;
        return Ok(false);
    }

    delete_children(&txn, id).await?;
    EProject::delete_by_id(id.to_string()).exec(&txn).await?;
    txn.commit().await?;

    Ok(true)
}
