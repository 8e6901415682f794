// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Service layer registration for the WorkTrace API
//!
//! The business tiers (data, repositories, logic, application) are
//! independently owned; this crate defines the registration contract each
//! tier satisfies and the registry the bootstrap drives. The server never
//! looks inside a tier — it only invokes the hooks in a fixed order during
//! startup and surfaces their names for health reporting.
//!
//! # Module Structure
//!
//! - [`settings`]: database connection settings consumed by the data tier
//! - [`registry`]: layer traits, default implementations, and `ServiceRegistry`

pub mod registry;
pub mod settings;

pub use registry::{
    ApplicationLayer, DataLayer, DefaultApplicationLayer, DefaultDataLayer, DefaultLogicLayer,
    DefaultRepositoryLayer, LogicLayer, RegistryError, RepositoryLayer, ServiceRegistry,
    VerifiedUser,
};
pub use settings::ConnectionSettings;
