// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Routes module
//!
//! Assembles the route tree. Health and documentation routes sit outside the
//! authenticated subtree, so they match before the authentication stage runs
//! and are reachable without any `Authorization` header in every environment.

pub mod handlers;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use handlers::{admin_overview_handler, health_handler, login_handler, me_handler};

use crate::{
    middleware::authentication_middleware,
    openapi::{openapi_spec, swagger_ui},
    state::ServerState,
};

/// Create application routes.
///
/// The authentication middleware wraps only the `/v1` subtree; the
/// authorization extractors inside its handlers complete the pipeline.
pub fn create_routes(state: &ServerState) -> Router<ServerState> {
    let health_routes = Router::new().route("/health", get(health_handler));

    // Always enabled, never authenticated
    let docs_routes = Router::new()
        .route("/api-doc/openapi.json", get(openapi_spec))
        .route("/swagger-ui", get(swagger_ui));

    let api_routes = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/me", get(me_handler))
        .route("/admin/overview", get(admin_overview_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            authentication_middleware,
        ));

    let v1 = Router::new().nest("/v1", api_routes);

    Router::new()
        .merge(health_routes)
        .merge(docs_routes)
        .merge(v1)
}
