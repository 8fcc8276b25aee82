/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod models;
pub mod repository;
pub mod types;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting GitMiner Server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
