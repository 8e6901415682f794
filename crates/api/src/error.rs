// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Error handling module
//!
//! Bootstrap failures (bind, startup, layer registration) are fatal and
//! propagate out of `main`. Request-level failures map to HTTP responses:
//! an unauthenticated request gets 401, an authenticated but insufficiently
//! privileged one gets 403 — the two outcomes are deliberately distinct.

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::RegistryError;
use thiserror::Error;

/// Error types for server operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// Network binding errors
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        /// Socket address that failed to bind
        address: SocketAddr,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server startup errors
    #[error("Server startup failed: {source}")]
    Startup {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server shutdown errors
    #[error("Server shutdown failed: {source}")]
    Shutdown {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Service layer registration errors
    #[error("Service registration failed: {source}")]
    Registration {
        /// Failing registration hook
        #[from]
        source: RegistryError,
    },

    /// Request carries no authenticated identity
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated identity lacks a required claim
    #[error("Access denied: requires role '{required_role}'")]
    AccessDenied {
        /// Role the endpoint requires
        required_role: String,
    },

    /// Credential check failed at the login endpoint
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token issuance failed
    #[error("Token issuance failed: {source}")]
    TokenIssuance {
        /// Underlying auth error
        #[source]
        source: auth::AuthError,
    },
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Bind { .. }
            | Self::Startup { .. }
            | Self::Shutdown { .. }
            | Self::Registration { .. }
            | Self::TokenIssuance { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::AccessDenied { .. } => StatusCode::FORBIDDEN,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
