// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! Token issuance and validation.
//!
//! Validation accepts a token only when all four checks pass: the HS256
//! signature against the configured secret, an exact `iss` match, an exact
//! `aud` match, and an unexpired lifetime. Any single failure rejects the
//! token outright; there is no partial-trust state.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::JwtSettings;

/// Errors surfaced by token issuance and validation.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token's `exp` claim is in the past.
    #[error("token has expired")]
    Expired,

    /// Signature, issuer, audience, or structural validation failed.
    #[error("invalid token: {reason}")]
    InvalidToken {
        /// Validation failure detail, safe to log but not returned to clients.
        reason: String,
    },

    /// Token could not be signed.
    #[error("failed to issue token: {source}")]
    Issuance {
        /// Underlying encoding error
        #[source]
        source: jsonwebtoken::errors::Error,
    },
}

/// Claims carried by a WorkTrace bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier).
    pub sub: String,
    /// Optional role used by endpoint-level authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl Claims {
    /// Whether the token carries the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}

/// Issues HS256-signed tokens from a [`JwtSettings`] snapshot.
///
/// Issuance lives next to validation so the login flow and the
/// authentication middleware can never drift apart on key or claims.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
    expire_minutes: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // EncodingKey holds secret material, keep it out of debug output
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expire_minutes", &self.expire_minutes)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Create an issuer bound to the given settings.
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret_key.as_bytes()),
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            expire_minutes: settings.expire_minutes,
        }
    }

    /// Issue a token for `subject` with an optional role claim.
    pub fn issue(&self, subject: &str, role: Option<&str>) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            role: role.map(ToString::to_string),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.expire_minutes)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| AuthError::Issuance { source })
    }
}

/// Validates inbound bearer tokens against a [`JwtSettings`] snapshot.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl TokenValidator {
    /// Create a validator bound to the given settings.
    ///
    /// Lifetime validation stays on with the library's default leeway; no
    /// additional clock-skew tolerance is configured.
    pub fn new(settings: &JwtSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&settings.issuer]);
        validation.set_audience(&[&settings.audience]);

        Self {
            decoding_key: DecodingKey::from_secret(settings.secret_key.as_bytes()),
            validation,
        }
    }

    /// Validate a raw token string, returning its claims on acceptance.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => Err(AuthError::Expired),
                _ => Err(AuthError::InvalidToken {
                    reason: err.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> JwtSettings {
        JwtSettings {
            secret_key: "test-secret".to_string(),
            issuer: "WorkTraceApi".to_string(),
            audience: "WorkTraceClient".to_string(),
            expire_minutes: 30,
        }
    }

    #[test]
    fn valid_token_is_accepted() {
        let settings = test_settings();
        let token = TokenIssuer::new(&settings)
            .issue("user-1", Some("admin"))
            .expect("issue");

        let claims = TokenValidator::new(&settings).validate(&token).expect("validate");
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.iss, "WorkTraceApi");
        assert_eq!(claims.aud, "WorkTraceClient");
        assert!(claims.has_role("admin"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let settings = test_settings();
        let token = TokenIssuer::new(&settings).issue("user-1", None).expect("issue");

        let other = JwtSettings {
            secret_key: "another-secret".to_string(),
            ..test_settings()
        };
        let result = TokenValidator::new(&other).validate(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let settings = test_settings();
        let token = TokenIssuer::new(&settings).issue("user-1", None).expect("issue");

        let other = JwtSettings {
            issuer: "SomeOtherApi".to_string(),
            ..test_settings()
        };
        let result = TokenValidator::new(&other).validate(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let settings = test_settings();
        let token = TokenIssuer::new(&settings).issue("user-1", None).expect("issue");

        let other = JwtSettings {
            audience: "SomeOtherClient".to_string(),
            ..test_settings()
        };
        let result = TokenValidator::new(&other).validate(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
    }

    #[test]
    fn expired_token_is_rejected() {
        let settings = test_settings();
        let now = Utc::now();
        // Well past the library's default leeway
        let claims = Claims {
            sub: "user-1".to_string(),
            role: None,
            iss: settings.issuer.clone(),
            aud: settings.audience.clone(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(settings.secret_key.as_bytes()),
        )
        .expect("encode");

        let result = TokenValidator::new(&settings).validate(&token);
        assert!(matches!(result, Err(AuthError::Expired)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let settings = test_settings();
        let result = TokenValidator::new(&settings).validate("not-a-token");
        assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
    }

    #[test]
    fn default_settings_round_trip() {
        // Zero configuration: issuer and validator share the fallback defaults
        let settings = JwtSettings::default();
        let token = TokenIssuer::new(&settings).issue("user-1", None).expect("issue");
        let claims = TokenValidator::new(&settings).validate(&token).expect("validate");
        assert_eq!(claims.sub, "user-1");
    }

    #[test]
    fn role_check() {
        let claims = Claims {
            sub: "user-1".to_string(),
            role: Some("admin".to_string()),
            iss: "WorkTraceApi".to_string(),
            aud: "WorkTraceClient".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(claims.has_role("admin"));
        assert!(!claims.has_role("manager"));

        let no_role = Claims { role: None, ..claims };
        assert!(!no_role.has_role("admin"));
    }
}
