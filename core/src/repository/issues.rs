/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait,
};
use std::collections::HashMap;

use crate::models::{Comment, Issue};
use crate::types::*;

/// Loads the issue rows matching `scope`, each paired with its comments in
/// stored order. Comments are selected through a subquery over the same scope
/// so the statement size does not grow with the number of issues.
pub(crate) async fn find_issue_rows<C: ConnectionTrait>(
    db: &C,
    scope: Condition,
) -> Result<Vec<(MIssue, Vec<Comment>)>, DbErr> {
    let issues = EIssue::find()
        .filter(scope.clone())
        .order_by_asc(CIssue::Project)
        .order_by_asc(CIssue::Position)
        .all(db)
        .await?;

    if issues.is_empty() {
        return Ok(Vec::new());
    }

    let issue_ids = EIssue::find()
        .select_only()
        .column(CIssue::Id)
        .filter(scope)
        .into_query();

    let mut comments: HashMap<String, Vec<Comment>> = HashMap::new();
    for comment in EComment::find()
        .filter(CComment::Issue.in_subquery(issue_ids))
        .order_by_asc(CComment::Position)
        .all(db)
        .await?
    {
        comments
            .entry(comment.issue.clone())
            .or_default()
            .push(comment.into());
    }

    Ok(issues
        .into_iter()
        .map(|issue| {
            let issue_comments = comments.remove(&issue.id).unwrap_or_default();
            (issue, issue_comments)
        })
        .collect())
}

async fn find_issues<C: ConnectionTrait>(db: &C, scope: Condition) -> Result<Vec<Issue>, DbErr> {
    Ok(find_issue_rows(db, scope)
        .await?
        .into_iter()
        .map(|(issue, comments)| Issue::from_model(issue, comments))
        .collect())
}

pub async fn list_issues<C: ConnectionTrait>(db: &C) -> Result<Vec<Issue>, DbErr> {
    find_issues(db, Condition::all()).await
}

pub async fn get_issue<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<Issue>, DbErr> {
    Ok(find_issues(db, Condition::all().add(CIssue::Id.eq(id)))
        .await?
        .pop())
}

/// `None` when the issue does not exist, otherwise its possibly empty comments.
pub async fn get_issue_comments<C: ConnectionTrait>(
    db: &C,
    id: &str,
) -> Result<Option<Vec<Comment>>, DbErr> {
    if EIssue::find_by_id(id.to_string()).one(db).await?.is_none() {
        return Ok(None);
    }

    let comments = EComment::find()
        .filter(CComment::Issue.eq(id))
        .order_by_asc(CComment::Position)
        .all(db)
        .await?;

    Ok(Some(comments.into_iter().map(Comment::from).collect()))
}

pub async fn get_issues_by_author<C: ConnectionTrait>(
    db: &C,
    author_id: &str,
) -> Result<Vec<Issue>, DbErr> {
    find_issues(db, Condition::all().add(CIssue::AuthorId.eq(author_id))).await
}

/// Exact, case-sensitive match on the state column.
pub async fn get_issues_by_state<C: ConnectionTrait>(
    db: &C,
    state: &str,
) -> Result<Vec<Issue>, DbErr> {
    find_issues(db, Condition::all().add(CIssue::State.eq(state))).await
}
