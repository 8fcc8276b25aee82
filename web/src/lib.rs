/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

use axum::Router;
use axum::routing::get;
use endpoints::*;
use gitminer_core::consts::API_BASE_PATH;
use gitminer_core::types::ServerState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    let api = Router::new()
        .route("/projects", get(projects::get).post(projects::post))
        .route(
            "/projects/{project}",
            get(projects::get_project)
                .put(projects::put_project)
                .delete(projects::delete_project),
        )
        .route("/issues", get(issues::get))
        .route("/issues/{issue}", get(issues::get_issue))
        .route("/issues/{issue}/comments", get(issues::get_issue_comments))
        .route("/commits", get(commits::get))
        .route("/commits/{commit}", get(commits::get_commit))
        .route("/comments", get(comments::get))
        .route("/comments/{comment}", get(comments::get_comment))
        .route("/health", get(get_health));

    Router::new()
        .nest(API_BASE_PATH, api)
        .fallback(handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on http://{}{}", server_url, API_BASE_PATH);

    axum::serve(listener, app).await
}
