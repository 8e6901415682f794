// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! JWT authentication for the WorkTrace API
//!
//! This crate owns the token-validation contract shared by the HTTP server and
//! the login flow: both sides read the same [`JwtSettings`] snapshot, so a
//! deployment is always internally self-consistent — even a completely
//! unconfigured one running on the fallback defaults.
//!
//! # Module Structure
//!
//! - [`settings`]: `JwtSettings` with safe fallback defaults
//! - [`token`]: claims, token issuance, and token validation

pub mod settings;
pub mod token;

pub use settings::JwtSettings;
pub use token::{AuthError, Claims, TokenIssuer, TokenValidator};
