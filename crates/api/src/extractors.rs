// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Authorization extractors
//!
//! These extractors are the authorization stage of the pipeline: they run
//! per matched endpoint, after the authentication middleware has (or has
//! not) attached an identity. A missing identity is 401; a present identity
//! lacking a required claim is 403.

use auth::Claims;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ServerError;

/// Role required by [`AdminUser`].
pub const ADMIN_ROLE: &str = "admin";

/// Extractor requiring an authenticated identity.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(Self)
            .ok_or(ServerError::Unauthenticated)
    }
}

/// Extractor requiring an authenticated identity with the `admin` role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(claims) = AuthenticatedUser::from_request_parts(parts, state).await?;
        if claims.has_role(ADMIN_ROLE) {
            Ok(Self(claims))
        } else {
            Err(ServerError::AccessDenied {
                required_role: ADMIN_ROLE.to_string(),
            })
        }
    }
}
