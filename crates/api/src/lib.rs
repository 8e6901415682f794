// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! WorkTrace API Server Implementation
//!
//! This crate provides the bootstrap layer of the WorkTrace business API,
//! built with Axum: safe environment configuration resolution, service layer
//! registration, JWT bearer authentication, and the ordered request pipeline
//! with graceful shutdown.
//!
//! # Module Structure
//!
//! - [`config`]: total, never-failing environment configuration resolution
//! - [`error`]: error types and HTTP response handling with proper status codes
//! - [`state`]: shared application state with cancellation token support
//! - [`server`]: pipeline assembly, lifecycle, and coordinated shutdown
//! - [`routes`]: route configuration and HTTP request handlers
//! - [`middleware`]: the authentication stage of the pipeline
//! - [`extractors`]: the authorization stage (401 vs 403 outcomes)
//! - [`docs`]: `OpenAPI` document with the Bearer security scheme
//! - [`openapi`]: specification and Swagger UI endpoints
//!
//! # Pipeline Order
//!
//! Documentation/health routes match first and bypass authentication; every
//! other request flows CORS -> authentication -> authorization -> dispatch.
//! The order is fixed at startup and never changes at request time.

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{AppConfig, Environment, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{CORS_POLICY_NAME, Server, ShutdownConfig};
pub use state::{HealthCheck, ServerState};
