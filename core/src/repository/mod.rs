/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Persistence accessors, one module per root entity.
//!
//! Every function is generic over [`sea_orm::ConnectionTrait`] so it runs the
//! same on the pool and inside a transaction. Absence is reported as `None`
//! or an empty list; turning that into a not-found response is up to the
//! caller.

pub mod comments;
pub mod commits;
pub mod issues;
pub mod projects;
