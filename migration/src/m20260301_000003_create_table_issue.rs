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
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Issue::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Issue::Project).string().not_null())
                    .col(ColumnDef::new(Issue::Position).integer().not_null())
                    .col(ColumnDef::new(Issue::Title).text().not_null())
                    .col(ColumnDef::new(Issue::Description).text())
                    .col(ColumnDef::new(Issue::State).string().not_null())
                    .col(
                        ColumnDef::new(Issue::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Issue::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Issue::ClosedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Issue::Labels).json().not_null())
                    .col(ColumnDef::new(Issue::AuthorId).string().not_null())
                    .col(ColumnDef::new(Issue::AuthorUsername).string().not_null())
                    .col(ColumnDef::new(Issue::AuthorName).string())
                    .col(ColumnDef::new(Issue::AuthorAvatarUrl).string().not_null())
                    .col(ColumnDef::new(Issue::AuthorWebUrl).string().not_null())
                    .col(ColumnDef::new(Issue::AssigneeId).string())
                    .col(ColumnDef::new(Issue::AssigneeUsername).string())
                    .col(ColumnDef::new(Issue::AssigneeName).string())
                    .col(ColumnDef::new(Issue::AssigneeAvatarUrl).string())
                    .col(ColumnDef::new(Issue::AssigneeWebUrl).string())
                    .col(ColumnDef::new(Issue::Votes).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-issue-project")
                            .from(Issue::Table, Issue::Project)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx-issue-project", Issue::Project),
            ("idx-issue-state", Issue::State),
            ("idx-issue-author_id", Issue::AuthorId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Issue::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Issue {
    Table,
    Id,
    Project,
    Position,
    Title,
    Description,
    State,
    CreatedAt,
    UpdatedAt,
    ClosedAt,
    Labels,
    AuthorId,
    AuthorUsername,
    AuthorName,
    AuthorAvatarUrl,
    AuthorWebUrl,
    AssigneeId,
    AssigneeUsername,
    AssigneeName,
    AssigneeAvatarUrl,
    AssigneeWebUrl,
    Votes,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}
