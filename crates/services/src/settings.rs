// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Database connection settings consumed by the data tier.

use serde::{Deserialize, Serialize};

/// Default database name when none is configured.
pub const DEFAULT_DATABASE_NAME: &str = "WorkTrace";

/// Connection parameters handed to the data layer at registration time.
///
/// Built once at startup and immutable thereafter. The connection string has
/// no fallback: a deployment without one still boots, and the data tier
/// decides how to behave without a backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Verbatim connection string, absent when unconfigured.
    pub connection_string: Option<String>,
    /// Database name, defaults to `WorkTrace`.
    pub database_name: String,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            connection_string: None,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
        }
    }
}
