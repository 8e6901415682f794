// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! HTTP request handlers module
//!
//! Handlers for health, login, and the protected identity endpoints. The
//! business controllers proper are owned by the application tier; the
//! endpoints here close the authentication loop (issue a token, prove it
//! back) and surface service health.

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    error::ServerError,
    extractors::{AdminUser, AuthenticatedUser},
    state::{HealthCheck, ServerState},
};

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check endpoint",
    description = "Returns the current health status of the API service including version, environment, and the registered service layers.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck)
    )
)]
pub async fn health_handler(State(state): State<ServerState>) -> impl IntoResponse {
    Json(state.health_check())
}

/// Login request carrying the credential pair to verify.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Account username
    #[schema(example = "ricardo")]
    pub username: String,
    /// Account password
    pub password: String,
}

/// Response carrying a freshly issued bearer token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Signed JWT to present as `Authorization: Bearer <token>`
    pub token: String,
    /// Token type, always `Bearer`
    pub token_type: String,
    /// Token lifetime in minutes
    pub expires_in_minutes: i64,
}

/// Login endpoint
///
/// Verifies credentials against the logic tier and issues a bearer token
/// from the same settings the validator uses, so an issued token is always
/// acceptable to this deployment.
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    tag = "auth",
    summary = "Exchange credentials for a bearer token",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = String)
    )
)]
pub async fn login_handler(
    State(state): State<ServerState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServerError> {
    let user = state
        .registry()
        .logic()
        .verify_credentials(&request.username, &request.password)
        .ok_or(ServerError::InvalidCredentials)?;

    let token = state
        .issuer()
        .issue(&user.subject, user.role.as_deref())
        .map_err(|source| ServerError::TokenIssuance { source })?;

    info!(subject = %user.subject, "issued bearer token");

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in_minutes: state.config().jwt.expire_minutes,
    }))
}

/// The authenticated caller's identity.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponse {
    /// Subject claim
    pub sub: String,
    /// Role claim, if any
    pub role: Option<String>,
    /// Issuer that signed the token
    pub iss: String,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Identity endpoint
///
/// Requires an authenticated identity; answers 401 when the request carries
/// no valid bearer token.
#[utoipa::path(
    get,
    path = "/v1/me",
    tag = "auth",
    summary = "Return the authenticated identity",
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "Authenticated identity", body = MeResponse),
        (status = 401, description = "No authenticated identity", body = String)
    )
)]
pub async fn me_handler(AuthenticatedUser(claims): AuthenticatedUser) -> Json<MeResponse> {
    Json(MeResponse {
        sub: claims.sub,
        role: claims.role,
        iss: claims.iss,
        exp: claims.exp,
    })
}

/// Administrative overview of the running instance.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminOverview {
    /// Environment the instance runs in
    pub environment: String,
    /// Registered service layers, in tier order
    pub layers: Vec<String>,
    /// Whether the deployment still runs on the fallback signing secret
    pub fallback_secret_in_use: bool,
}

/// Admin endpoint
///
/// Requires the `admin` role; an authenticated caller without it gets 403,
/// distinct from the 401 an unauthenticated caller gets.
#[utoipa::path(
    get,
    path = "/v1/admin/overview",
    tag = "admin",
    summary = "Instance overview for administrators",
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "Instance overview", body = AdminOverview),
        (status = 401, description = "No authenticated identity", body = String),
        (status = 403, description = "Caller lacks the admin role", body = String)
    )
)]
pub async fn admin_overview_handler(
    State(state): State<ServerState>,
    AdminUser(_claims): AdminUser,
) -> Json<AdminOverview> {
    Json(AdminOverview {
        environment: state.config().server.environment.to_string(),
        layers: state.registry().layer_names(),
        fallback_secret_in_use: state.config().jwt.uses_fallback_secret(),
    })
}
