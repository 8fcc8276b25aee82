/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::models::Comment;
use crate::types::*;

pub async fn list_comments<C: ConnectionTrait>(db: &C) -> Result<Vec<Comment>, DbErr> {
    let comments = EComment::find()
        .order_by_asc(CComment::Issue)
        .order_by_asc(CComment::Position)
        .all(db)
        .await?;

    Ok(comments.into_iter().map(Comment::from).collect())
}

pub async fn get_comment<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<Comment>, DbErr> {
    Ok(EComment::find_by_id(id.to_string())
        .one(db)
        .await?
        .map(Comment::from))
}

pub async fn get_comments_by_author<C: ConnectionTrait>(
    db: &C,
    author_id: &str,
) -> Result<Vec<Comment>, DbErr> {
    let comments = EComment::find()
        .filter(CComment::AuthorId.eq(author_id))
        .order_by_asc(CComment::Issue)
        .order_by_asc(CComment::Position)
        .all(db)
        .await?;

    Ok(comments.into_iter().map(Comment::from).collect())
}
