/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::models::Commit;
use crate::types::*;

pub async fn list_commits<C: ConnectionTrait>(db: &C) -> Result<Vec<Commit>, DbErr> {
    let commits = ECommit::find()
        .order_by_asc(CCommit::Project)
        .order_by_asc(CCommit::Position)
        .all(db)
        .await?;

    Ok(commits.into_iter().map(Commit::from).collect())
}

pub async fn get_commit<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<Commit>, DbErr> {
    Ok(ECommit::find_by_id(id.to_string())
        .one(db)
        .await?
        .map(Commit::from))
}
