// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Server configuration module
//!
//! Configuration is resolved from the process environment exactly once at
//! startup. Resolution is total: a key that is absent or unparsable yields
//! its documented default, never an error. The deployment platform may omit
//! or temporarily misconfigure variables and the process must keep booting
//! rather than crash-loop.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use auth::JwtSettings;
use serde::{Deserialize, Serialize};
use services::ConnectionSettings;

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn string_or_default(value: Option<String>, default: &str) -> String {
    // Present values pass through verbatim, no trimming or validation.
    value.unwrap_or_else(|| default.to_string())
}

fn parse_or_default<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|raw| raw.parse().ok()).unwrap_or(default)
}

/// Resolve a string key: absent yields `default`, present yields the raw
/// value verbatim.
pub fn resolve(key: &str, default: &str) -> String {
    string_or_default(env_lookup(key), default)
}

/// Resolve an optional string key with no default.
pub fn resolve_optional(key: &str) -> Option<String> {
    env_lookup(key)
}

/// Resolve a parsed key: absent or unparsable yields `default`.
pub fn resolve_parsed<T: FromStr>(key: &str, default: T) -> T {
    parse_or_default(env_lookup(key), default)
}

/// Environment types for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Development environment
    Development,
    /// Testing environment
    Testing,
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            "testing" => Ok(Self::Testing),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: IpAddr,
    /// Server port
    pub port: u16,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Environment type
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            timeout_seconds: 30,
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Get socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// The single configuration snapshot built at startup.
///
/// Every component receives this snapshot by shared reference or copy; no
/// component re-reads the environment after boot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listener configuration
    pub server: ServerConfig,
    /// Database settings handed to the data layer
    pub database: ConnectionSettings,
    /// Token signing and validation settings
    pub jwt: JwtSettings,
}

impl AppConfig {
    /// Resolve the full configuration snapshot from the process environment.
    ///
    /// Total by construction: every key folds "absent" and "invalid" into its
    /// default at the point of parsing, so this cannot fail.
    pub fn from_env() -> Self {
        let server = ServerConfig {
            host: resolve_parsed("SERVER_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: resolve_parsed("SERVER_PORT", 3000),
            timeout_seconds: resolve_parsed("SERVER_TIMEOUT_SECONDS", 30),
            environment: resolve_parsed("ENVIRONMENT", Environment::Development),
        };

        let database = ConnectionSettings {
            connection_string: resolve_optional("WORKTRACEDATABASE_CONNECTIONSTRING"),
            database_name: resolve(
                "WORKTRACEDATABASE_DATABASENAME",
                services::settings::DEFAULT_DATABASE_NAME,
            ),
        };

        let defaults = JwtSettings::default();
        let jwt = JwtSettings {
            secret_key: resolve("APPLICATIONSETTINGS_SECRETKEY", &defaults.secret_key),
            issuer: resolve("APPLICATIONSETTINGS_ISSUER", &defaults.issuer),
            audience: resolve("APPLICATIONSETTINGS_AUDIENCE", &defaults.audience),
            expire_minutes: resolve_parsed(
                "APPLICATIONSETTINGS_EXPIREMINUTES",
                defaults.expire_minutes,
            ),
        };

        Self {
            server,
            database,
            jwt,
        }
    }

    /// Create configuration optimized for testing
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig {
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 0, // let OS choose available port
                timeout_seconds: 5,
                environment: Environment::Testing,
            },
            database: ConnectionSettings::default(),
            jwt: JwtSettings::default(),
        }
    }
}
