/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gitminer_core::input::InputError;
use gitminer_core::types::BaseResponse;
use sea_orm::{DbErr, SqlErr};
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    Conflict(String),
    Database(DbErr),
    InputValidation(InputError),
    JsonParsing(JsonRejection),
    QueryParsing(QueryRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::InputValidation(err) => write!(f, "Input validation error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::QueryParsing(err) => write!(f, "Query parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::InputValidation(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::QueryParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        // Taken client-supplied ids surface as unique violations.
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => WebError::already_exists("Resource"),
            _ => WebError::Database(err),
        }
    }
}

impl From<InputError> for WebError {
    fn from(err: InputError) -> Self {
        WebError::InputValidation(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<QueryRejection> for WebError {
    fn from(err: QueryRejection) -> Self {
        WebError::QueryParsing(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            WebError::InputValidation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            WebError::JsonParsing(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", err.body_text()))
            }
            WebError::QueryParsing(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query: {}", err.body_text()),
            ),
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn already_exists(resource: &str) -> Self {
        WebError::Conflict(format!("{} already exists", resource))
    }

    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }
}
