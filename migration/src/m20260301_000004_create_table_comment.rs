/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Comment::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Comment::Issue).string().not_null())
                    .col(ColumnDef::new(Comment::Position).integer().not_null())
                    .col(ColumnDef::new(Comment::Body).text().not_null())
                    .col(ColumnDef::new(Comment::AuthorId).string().not_null())
                    .col(ColumnDef::new(Comment::AuthorUsername).string().not_null())
                    .col(ColumnDef::new(Comment::AuthorName).string())
                    .col(ColumnDef::new(Comment::AuthorAvatarUrl).string().not_null())
                    .col(ColumnDef::new(Comment::AuthorWebUrl).string().not_null())
                    .col(
                        ColumnDef::new(Comment::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Comment::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-comment-issue")
                            .from(Comment::Table, Comment::Issue)
                            .to(Issue::Table, Issue::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx-comment-issue", Comment::Issue),
            ("idx-comment-author_id", Comment::AuthorId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Comment::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    Issue,
    Position,
    Body,
    AuthorId,
    AuthorUsername,
    AuthorName,
    AuthorAvatarUrl,
    AuthorWebUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Issue {
    Table,
    Id,
}
