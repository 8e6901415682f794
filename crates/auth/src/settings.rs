// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! JWT settings shared by the token issuer and the token validator.

use serde::{Deserialize, Serialize};

/// Fallback signing key used when no secret is configured.
///
/// Security note: any deployment left on this literal is trivially forgeable
/// by anyone who reads the source. It exists so an unconfigured instance
/// boots instead of crash-looping; production deployments must override it.
pub const FALLBACK_SECRET_KEY: &str = "Clave_Por_Defecto_Muy_Segura_Para_Evitar_Crash_123";

/// Default `iss` claim value.
pub const DEFAULT_ISSUER: &str = "WorkTraceApi";

/// Default `aud` claim value.
pub const DEFAULT_AUDIENCE: &str = "WorkTraceClient";

/// Default token lifetime in minutes.
pub const DEFAULT_EXPIRE_MINUTES: i64 = 30;

/// Token signing and validation parameters.
///
/// Constructed once at startup and shared read-only afterwards. Both the
/// issuing side (login) and the validating side (authentication middleware)
/// consume the same instance, so the two can never disagree on issuer,
/// audience, or key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtSettings {
    /// Symmetric HS256 signing key (UTF-8 bytes are used as key material).
    pub secret_key: String,
    /// Expected `iss` claim, compared exactly.
    pub issuer: String,
    /// Expected `aud` claim, compared exactly.
    pub audience: String,
    /// Lifetime of newly issued tokens, in minutes.
    pub expire_minutes: i64,
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            secret_key: FALLBACK_SECRET_KEY.to_string(),
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            expire_minutes: DEFAULT_EXPIRE_MINUTES,
        }
    }
}

impl JwtSettings {
    /// Whether this configuration is still running on the insecure fallback key.
    pub fn uses_fallback_secret(&self) -> bool {
        self.secret_key == FALLBACK_SECRET_KEY
    }
}
