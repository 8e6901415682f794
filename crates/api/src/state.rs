// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Server state management module
//!
//! Shared application state: the configuration snapshot, the service
//! registry, the token issuer/validator pair, and the cancellation token.
//! Everything here is built once at startup and read-only afterwards, so
//! concurrent requests share it without synchronization.

use std::sync::Arc;

use auth::{TokenIssuer, TokenValidator};
use serde::{Deserialize, Serialize};
use services::ServiceRegistry;
use tokio_util::sync::CancellationToken;
use utoipa::ToSchema;

use crate::config::{AppConfig, Environment};

/// Shared application state with cancellation token support
#[derive(Debug, Clone)]
pub struct ServerState {
    config: Arc<AppConfig>,
    registry: Arc<ServiceRegistry>,
    issuer: Arc<TokenIssuer>,
    validator: Arc<TokenValidator>,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

impl ServerState {
    /// Create new server state from the startup snapshot.
    pub fn new(
        config: AppConfig,
        registry: Arc<ServiceRegistry>,
        cancellation_token: CancellationToken,
    ) -> Self {
        let issuer = Arc::new(TokenIssuer::new(&config.jwt));
        let validator = Arc::new(TokenValidator::new(&config.jwt));
        Self {
            config: Arc::new(config),
            registry,
            issuer,
            validator,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The service registry
    pub fn registry(&self) -> &Arc<ServiceRegistry> {
        &self.registry
    }

    /// Token issuer shared with the login flow
    pub fn issuer(&self) -> &Arc<TokenIssuer> {
        &self.issuer
    }

    /// Token validator used by the authentication stage
    pub fn validator(&self) -> &Arc<TokenValidator> {
        &self.validator
    }

    /// Report service health: version, environment, registered layers.
    pub fn health_check(&self) -> HealthCheck {
        HealthCheck {
            status: HealthStatus::Up,
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.server.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
            layers: self.registry.layer_names(),
        }
    }
}

/// Health status of the service
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum HealthStatus {
    /// Service is fully operational and responding normally
    Up,

    /// Service is not operational or has critical failures
    Down {
        /// Human-readable explanation of why the service is down
        reason: Box<str>,
    },
}

/// Health check status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    /// Service status
    pub status: HealthStatus,
    /// Service version
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
    /// Registered service layers, in tier order
    pub layers: Vec<String>,
}
