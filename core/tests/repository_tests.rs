/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the persistence accessors against an in-memory store

mod common;

use common::*;
use gitminer_core::repository::{comments, commits, issues, projects};
use gitminer_core::types::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};

fn pitest() -> gitminer_core::models::Project {
    project(
        "15717393",
        "pitest",
        vec![commit("ee6e291"), commit("95e8102")],
        vec![
            issue("1556497126", "open", user("1891135", "hcoles"), Vec::new()),
            issue(
                "1537933904",
                "closed",
                user("1671931", "davidburstrom"),
                vec![comment("1398766669", user("1891135", "hcoles"))],
            ),
        ],
    )
}

#[tokio::test]
async fn test_create_and_get_project() -> Result<(), DbErr> {
    let db = create_test_db().await;

    let created = projects::save_project(&db, pitest()).await?;
    assert_eq!(created, pitest());

    let fetched = projects::get_project(&db, "15717393").await?.unwrap();
    assert_eq!(fetched, pitest());

    assert!(projects::get_project(&db, "missing").await?.is_none());
    assert_eq!(projects::list_projects(&db).await?, vec![pitest()]);

    Ok(())
}

#[tokio::test]
async fn test_child_collections_keep_order() -> Result<(), DbErr> {
    let db = create_test_db().await;

    let commits: Vec<_> = ["c", "a", "b"].into_iter().map(commit).collect();
    projects::save_project(&db, project("1", "demo", commits, Vec::new())).await?;

    let fetched = projects::get_project(&db, "1").await?.unwrap();
    let ids: Vec<_> = fetched.commits.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);

    Ok(())
}

#[tokio::test]
async fn test_get_project_by_name_is_exact() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, pitest()).await?;

    let found = projects::get_project_by_name(&db, "pitest").await?.unwrap();
    assert_eq!(found.id, "15717393");

    assert!(projects::get_project_by_name(&db, "Pitest").await?.is_none());
    assert!(projects::get_project_by_name(&db, "pit").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_get_project_by_duplicate_name_is_absent() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, project("1", "demo", Vec::new(), Vec::new())).await?;
    projects::save_project(&db, project("2", "demo", Vec::new(), Vec::new())).await?;

    assert!(projects::get_project_by_name(&db, "demo").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_update_replaces_children() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, pitest()).await?;

    let replacement = project(
        "15717393",
        "pitest-renamed",
        vec![commit("new-commit")],
        vec![issue("42", "open", user("7", "eve"), Vec::new())],
    );

    assert!(projects::update_project(&db, "15717393", replacement.clone()).await?);

    let fetched = projects::get_project(&db, "15717393").await?.unwrap();
    assert_eq!(fetched, replacement);

    // Old children and their comments are gone, not merged.
    assert!(commits::get_commit(&db, "ee6e291").await?.is_none());
    assert!(issues::get_issue(&db, "1537933904").await?.is_none());
    assert!(comments::get_comment(&db, "1398766669").await?.is_none());
    assert_eq!(ECommit::find().count(&db).await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_update_keeps_stored_id() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, project("1", "demo", Vec::new(), Vec::new())).await?;

    let mut replacement = project("1", "demo", Vec::new(), Vec::new());
    replacement.id = "2".to_string();
    projects::update_project(&db, "1", replacement).await?;

    assert!(projects::get_project(&db, "1").await?.is_some());
    assert!(projects::get_project(&db, "2").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_missing_project() -> Result<(), DbErr> {
    let db = create_test_db().await;

    let replacement = project("9", "ghost", Vec::new(), Vec::new());
    assert!(!projects::update_project(&db, "9", replacement).await?);
    assert!(!projects::delete_project(&db, "9").await?);
    assert!(projects::get_project(&db, "9").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_delete_removes_children() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, pitest()).await?;
    assert!(projects::delete_project(&db, "15717393").await?);

    assert!(projects::get_project(&db, "15717393").await?.is_none());
    assert!(issues::get_issue_comments(&db, "1537933904").await?.is_none());
    assert_eq!(ECommit::find().count(&db).await?, 0);
    assert_eq!(EIssue::find().count(&db).await?, 0);
    assert_eq!(EComment::find().count(&db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_issue_lookups() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, pitest()).await?;

    let mut other = issue("3", "Open", user("1891135", "hcoles"), Vec::new());
    other.title = "Case differs".to_string();
    projects::save_project(&db, project("2", "other", Vec::new(), vec![other])).await?;

    assert_eq!(issues::list_issues(&db).await?.len(), 3);

    let open = issues::get_issues_by_state(&db, "open").await?;
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, "1556497126");

    assert!(issues::get_issues_by_state(&db, "ope").await?.is_empty());

    let by_author = issues::get_issues_by_author(&db, "1891135").await?;
    let mut ids: Vec<_> = by_author.iter().map(|i| i.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["1556497126", "3"]);

    let closed = issues::get_issue(&db, "1537933904").await?.unwrap();
    assert_eq!(closed.comments.len(), 1);
    assert_eq!(closed.comments[0].author.username, "hcoles");

    Ok(())
}

#[tokio::test]
async fn test_issue_comments_empty_vs_missing() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, pitest()).await?;

    let empty = issues::get_issue_comments(&db, "1556497126").await?;
    assert_eq!(empty, Some(Vec::new()));

    let some = issues::get_issue_comments(&db, "1537933904").await?.unwrap();
    assert_eq!(some.len(), 1);

    assert!(issues::get_issue_comments(&db, "missing").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_commit_and_comment_lookups() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, pitest()).await?;

    assert_eq!(commits::list_commits(&db).await?.len(), 2);
    assert_eq!(
        commits::get_commit(&db, "95e8102").await?,
        Some(commit("95e8102"))
    );

    assert_eq!(comments::list_comments(&db).await?.len(), 1);
    assert!(comments::get_comment(&db, "1398766669").await?.is_some());
    assert_eq!(
        comments::get_comments_by_author(&db, "1891135").await?.len(),
        1
    );
    assert!(
        comments::get_comments_by_author(&db, "1671931")
            .await?
            .is_empty()
    );

    Ok(())
}

#[tokio::test]
async fn test_save_overwrites_existing_project() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, pitest()).await?;

    let replacement = project("15717393", "pitest", vec![commit("abc1234")], Vec::new());
    let saved = projects::save_project(&db, replacement.clone()).await?;
    assert_eq!(saved, replacement);

    assert_eq!(projects::list_projects(&db).await?, vec![replacement]);
    assert_eq!(EIssue::find().count(&db).await?, 0);
    assert_eq!(EComment::find().count(&db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_save_rejects_child_id_of_other_project() -> Result<(), DbErr> {
    let db = create_test_db().await;
    projects::save_project(&db, pitest()).await?;

    let clash = project("2", "other", vec![commit("ee6e291")], Vec::new());
    let err = projects::save_project(&db, clash).await.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    // The failed save leaves nothing behind.
    assert!(projects::get_project(&db, "2").await?.is_none());
    assert_eq!(ECommit::find().count(&db).await?, 2);

    Ok(())
}

#[tokio::test]
async fn test_project_with_more_rows_than_bind_parameters() -> Result<(), DbErr> {
    let db = create_test_db().await;

    // Above the SQLite limit of 32766 bound parameters per statement.
    const ISSUES: usize = 33_000;

    let issues = (0..ISSUES)
        .map(|n| {
            let comments = if n % 1000 == 0 {
                vec![comment(&format!("c{n}"), user("1891135", "hcoles"))]
            } else {
                Vec::new()
            };
            issue(&n.to_string(), "open", user("1671931", "davidburstrom"), comments)
        })
        .collect();

    let saved = projects::save_project(&db, project("1", "big", Vec::new(), issues)).await?;
    assert_eq!(saved.issues.len(), ISSUES);

    assert_eq!(issues::list_issues(&db).await?.len(), ISSUES);
    assert_eq!(
        issues::get_issues_by_state(&db, "open").await?.len(),
        ISSUES
    );

    let fetched = projects::get_project(&db, "1").await?.unwrap();
    assert_eq!(fetched.issues.len(), ISSUES);
    assert_eq!(fetched.issues[1000].comments.len(), 1);
    assert_eq!(fetched.issues[1000].id, "1000");

    assert_eq!(projects::list_projects(&db).await?[0].issues.len(), ISSUES);

    assert!(projects::delete_project(&db, "1").await?);
    assert_eq!(EIssue::find().count(&db).await?, 0);
    assert_eq!(EComment::find().count(&db).await?, 0);

    Ok(())
}
