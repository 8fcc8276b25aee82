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
                    .table(Commit::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Commit::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Commit::Project).string().not_null())
                    .col(ColumnDef::new(Commit::Position).integer().not_null())
                    .col(ColumnDef::new(Commit::Title).text().not_null())
                    .col(ColumnDef::new(Commit::Message).text().not_null())
                    .col(ColumnDef::new(Commit::AuthorName).string().not_null())
                    .col(ColumnDef::new(Commit::AuthorEmail).string().not_null())
                    .col(
                        ColumnDef::new(Commit::AuthoredDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Commit::WebUrl).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-commit-project")
                            .from(Commit::Table, Commit::Project)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-commit-project")
                    .table(Commit::Table)
                    .col(Commit::Project)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Commit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Commit {
    Table,
    Id,
    Project,
    Position,
    Title,
    Message,
    AuthorName,
    AuthorEmail,
    AuthoredDate,
    WebUrl,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}
