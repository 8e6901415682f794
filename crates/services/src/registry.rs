// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Service registry driving the layer registration hooks.
//!
//! Registration runs exactly once during bootstrap, synchronously, in
//! data → repositories → logic → application order. A failing hook aborts
//! startup; nothing at this level is retried.

use std::{fmt, sync::Arc};

use tracing::info;

use crate::settings::ConnectionSettings;

/// Error type for registration hooks.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A layer failed to wire itself up.
    #[error("failed to register {layer} layer: {reason}")]
    Registration {
        /// Layer name as reported by the hook
        layer: String,
        /// Failure detail
        reason: String,
    },
}

/// A user whose credentials checked out against the logic tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    /// Stable subject identifier for the token's `sub` claim.
    pub subject: String,
    /// Role granted to the user, if any.
    pub role: Option<String>,
}

/// Data-tier hook; receives the connection settings it will own.
pub trait DataLayer: Send + Sync + fmt::Debug {
    /// Layer name for logging and health reporting.
    fn name(&self) -> &str;

    /// Wire up the tier against the configured database.
    fn register(&self, settings: &ConnectionSettings) -> Result<(), RegistryError>;
}

/// Repository-tier hook.
pub trait RepositoryLayer: Send + Sync + fmt::Debug {
    /// Layer name for logging and health reporting.
    fn name(&self) -> &str;

    /// Wire up the tier.
    fn register(&self) -> Result<(), RegistryError>;
}

/// Business-logic-tier hook; also the credential authority behind login.
pub trait LogicLayer: Send + Sync + fmt::Debug {
    /// Layer name for logging and health reporting.
    fn name(&self) -> &str;

    /// Wire up the tier.
    fn register(&self) -> Result<(), RegistryError>;

    /// Check a credential pair, returning the verified user on success.
    fn verify_credentials(&self, username: &str, password: &str) -> Option<VerifiedUser>;
}

/// Application-tier hook (controllers and request-level services).
pub trait ApplicationLayer: Send + Sync + fmt::Debug {
    /// Layer name for logging and health reporting.
    fn name(&self) -> &str;

    /// Wire up the tier.
    fn register(&self) -> Result<(), RegistryError>;
}

/// Registry holding one hook per tier.
///
/// The bootstrap calls [`ServiceRegistry::register_all`] once before the
/// listener starts; afterwards the registry is shared read-only.
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    data: Arc<dyn DataLayer>,
    repositories: Arc<dyn RepositoryLayer>,
    logic: Arc<dyn LogicLayer>,
    application: Arc<dyn ApplicationLayer>,
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::with_layers(
            Arc::new(DefaultDataLayer),
            Arc::new(DefaultRepositoryLayer),
            Arc::new(DefaultLogicLayer),
            Arc::new(DefaultApplicationLayer),
        )
    }
}

impl ServiceRegistry {
    /// Create a registry from externally owned layer implementations.
    pub fn with_layers(
        data: Arc<dyn DataLayer>,
        repositories: Arc<dyn RepositoryLayer>,
        logic: Arc<dyn LogicLayer>,
        application: Arc<dyn ApplicationLayer>,
    ) -> Self {
        Self {
            data,
            repositories,
            logic,
            application,
        }
    }

    /// Invoke every registration hook, in tier order.
    pub fn register_all(&self, settings: &ConnectionSettings) -> Result<(), RegistryError> {
        self.data.register(settings)?;
        self.repositories.register()?;
        self.logic.register()?;
        self.application.register()?;
        Ok(())
    }

    /// The logic tier, used by the login endpoint for credential checks.
    pub fn logic(&self) -> &Arc<dyn LogicLayer> {
        &self.logic
    }

    /// Names of all registered layers, in tier order.
    pub fn layer_names(&self) -> Vec<String> {
        vec![
            self.data.name().to_string(),
            self.repositories.name().to_string(),
            self.logic.name().to_string(),
            self.application.name().to_string(),
        ]
    }
}

/// Placeholder data tier used until the real tier is plugged in.
#[derive(Debug)]
pub struct DefaultDataLayer;

impl DataLayer for DefaultDataLayer {
    fn name(&self) -> &str {
        "data"
    }

    fn register(&self, settings: &ConnectionSettings) -> Result<(), RegistryError> {
        info!(
            database = %settings.database_name,
            has_connection_string = settings.connection_string.is_some(),
            "registered data layer",
        );
        Ok(())
    }
}

/// Placeholder repository tier.
#[derive(Debug)]
pub struct DefaultRepositoryLayer;

impl RepositoryLayer for DefaultRepositoryLayer {
    fn name(&self) -> &str {
        "repositories"
    }

    fn register(&self) -> Result<(), RegistryError> {
        info!("registered repository layer");
        Ok(())
    }
}

/// Placeholder logic tier.
///
/// Accepts any non-empty credential pair and grants the `admin` role to the
/// `admin` username. Stands in for the real business tier in development and
/// tests only.
#[derive(Debug)]
pub struct DefaultLogicLayer;

impl LogicLayer for DefaultLogicLayer {
    fn name(&self) -> &str {
        "logic"
    }

    fn register(&self) -> Result<(), RegistryError> {
        info!("registered logic layer");
        Ok(())
    }

    fn verify_credentials(&self, username: &str, password: &str) -> Option<VerifiedUser> {
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(VerifiedUser {
            subject: username.to_string(),
            role: (username == "admin").then(|| "admin".to_string()),
        })
    }
}

/// Placeholder application tier.
#[derive(Debug)]
pub struct DefaultApplicationLayer;

impl ApplicationLayer for DefaultApplicationLayer {
    fn name(&self) -> &str {
        "application"
    }

    fn register(&self) -> Result<(), RegistryError> {
        info!("registered application layer");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_registers_all_layers() {
        let registry = ServiceRegistry::default();
        let settings = ConnectionSettings::default();
        assert!(registry.register_all(&settings).is_ok());
    }

    #[test]
    fn layer_names_in_tier_order() {
        let registry = ServiceRegistry::default();
        assert_eq!(
            registry.layer_names(),
            vec!["data", "repositories", "logic", "application"]
        );
    }

    #[test]
    fn failing_layer_aborts_registration() {
        #[derive(Debug)]
        struct BrokenRepositories;

        impl RepositoryLayer for BrokenRepositories {
            fn name(&self) -> &str {
                "repositories"
            }

            fn register(&self) -> Result<(), RegistryError> {
                Err(RegistryError::Registration {
                    layer: self.name().to_string(),
                    reason: "no backing store".to_string(),
                })
            }
        }

        let registry = ServiceRegistry::with_layers(
            Arc::new(DefaultDataLayer),
            Arc::new(BrokenRepositories),
            Arc::new(DefaultLogicLayer),
            Arc::new(DefaultApplicationLayer),
        );
        let result = registry.register_all(&ConnectionSettings::default());
        assert!(matches!(result, Err(RegistryError::Registration { .. })));
    }

    #[test]
    fn default_logic_verifies_non_empty_credentials() {
        let logic = DefaultLogicLayer;
        assert!(logic.verify_credentials("", "pw").is_none());
        assert!(logic.verify_credentials("user", "").is_none());

        let user = logic.verify_credentials("ricardo", "pw").expect("verified");
        assert_eq!(user.subject, "ricardo");
        assert!(user.role.is_none());

        let admin = logic.verify_credentials("admin", "pw").expect("verified");
        assert_eq!(admin.role.as_deref(), Some("admin"));
    }
}
