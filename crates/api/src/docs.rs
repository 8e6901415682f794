// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! `OpenAPI` document definition
//!
//! Declares the API metadata and the `Bearer` security scheme surfaced to
//! documentation consumers. The scheme is advisory: it tells clients how to
//! attach a token, while enforcement lives in the authentication middleware
//! and the authorization extractors.

use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

/// `OpenAPI` specification for the WorkTrace API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "WorkTraceApi",
        version = "v1",
        description = "Business API for the WorkTrace platform",
        contact(name = "WorkTrace Team", email = "api@worktrace.example")
    ),
    paths(
        crate::routes::handlers::health_handler,
        crate::routes::handlers::login_handler,
        crate::routes::handlers::me_handler,
        crate::routes::handlers::admin_overview_handler,
    ),
    components(schemas(
        crate::state::HealthCheck,
        crate::state::HealthStatus,
        crate::config::Environment,
        crate::routes::handlers::LoginRequest,
        crate::routes::handlers::LoginResponse,
        crate::routes::handlers::MeResponse,
        crate::routes::handlers::AdminOverview,
    )),
    modifiers(&BearerSecurity),
    security(("Bearer" = [])),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Login and identity"),
        (name = "admin", description = "Administrative endpoints")
    )
)]
pub struct ApiDoc;

/// Registers the `Bearer` HTTP security scheme (JWT in the `Authorization`
/// header) on the generated document.
#[derive(Debug)]
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "Bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter: {your token}"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("Bearer"));
    }

    #[test]
    fn document_carries_global_security_requirement() {
        let doc = ApiDoc::openapi();
        let security = doc.security.expect("security requirements");
        assert!(!security.is_empty());
    }

    #[test]
    fn document_metadata() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "WorkTraceApi");
        assert_eq!(doc.info.version, "v1");
    }
}
