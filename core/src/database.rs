/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::log::LevelFilter;

use super::consts::{DB_CONNECT_TIMEOUT, DB_IDLE_TIMEOUT, DB_MAX_LIFETIME};
use super::types::Cli;

pub fn database_url(cli: &Cli) -> Result<String> {
    if let Some(file) = &cli.database_url_file {
        let url = std::fs::read_to_string(file).context("Failed to read database url from file")?;
        Ok(url.trim().to_string())
    } else if let Some(url) = &cli.database_url {
        Ok(url.clone())
    } else {
        anyhow::bail!("No database url provided")
    }
}

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url(cli)?);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(cli.database_max_connections)
        .min_connections(1)
        .connect_timeout(DB_CONNECT_TIMEOUT)
        .acquire_timeout(DB_CONNECT_TIMEOUT)
        .idle_timeout(DB_IDLE_TIMEOUT)
        .max_lifetime(DB_MAX_LIFETIME);

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    tracing::debug!(backend = ?db.get_database_backend(), "Database ready");

    Ok(db)
}
