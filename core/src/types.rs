/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "GitMiner", display_name = "GitMiner", bin_name = "gitminer-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "GITMINER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "GITMINER_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "GITMINER_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "GITMINER_PORT", value_parser = port_in_range, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "GITMINER_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "GITMINER_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "GITMINER_DATABASE_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "100")]
    pub database_max_connections: u32,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EComment = comment::Entity;
pub type ECommit = commit::Entity;
pub type EIssue = issue::Entity;
pub type EProject = project::Entity;

pub type MComment = comment::Model;
pub type MCommit = commit::Model;
pub type MIssue = issue::Model;
pub type MProject = project::Model;

pub type AComment = comment::ActiveModel;
pub type ACommit = commit::ActiveModel;
pub type AIssue = issue::ActiveModel;
pub type AProject = project::ActiveModel;

pub type CComment = comment::Column;
pub type CCommit = commit::Column;
pub type CIssue = issue::Column;
pub type CProject = project::Column;
