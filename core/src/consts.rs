/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;
use std::time::Duration;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const API_BASE_PATH: &str = "/gitminer";

pub const DB_CONNECT_TIMEOUT: Duration = Duration::from_secs(8);
pub const DB_IDLE_TIMEOUT: Duration = Duration::from_secs(300);
pub const DB_MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Rows per multi-row insert. Issues have the most columns, so a full batch
/// stays well below the SQLite and Postgres bind parameter limits.
pub const DB_INSERT_BATCH: usize = 1000;
