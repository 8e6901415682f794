// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Middleware module for HTTP request processing
//!
//! The authentication stage validates a bearer token when one is presented
//! and attaches the resulting claims to the request. A missing or invalid
//! token never short-circuits here: the request continues without identity
//! and rejection, if any, happens at the authorization stage.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::state::ServerState;

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; anything else (missing header,
/// other scheme, empty token) yields `None`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Authentication stage of the request pipeline.
///
/// Runs after CORS and before routing for every request under the
/// authenticated router. On success the validated [`auth::Claims`] are
/// inserted into request extensions for the authorization extractors.
pub async fn authentication_middleware(
    State(state): State<ServerState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(req.headers()) {
        match state.validator().validate(token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(err) => {
                // Deliberately not a rejection: unauthenticated requests
                // may still reach endpoints that allow anonymous access.
                debug!(error = %err, "bearer token rejected");
            }
        }
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).expect("header"));
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let headers = headers_with_auth("bearer abc");
        assert_eq!(bearer_token(&headers), Some("abc"));
        let headers = headers_with_auth("BEARER abc");
        assert_eq!(bearer_token(&headers), Some("abc"));
    }

    #[test]
    fn rejects_other_schemes_and_missing_header() {
        let headers = headers_with_auth("Basic dXNlcjpwdw==");
        assert_eq!(bearer_token(&headers), None);

        let headers = headers_with_auth("Bearer ");
        assert_eq!(bearer_token(&headers), None);

        let headers = headers_with_auth("abc");
        assert_eq!(bearer_token(&headers), None);

        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
