// SPDX-FileCopyrightText: 2025 WorkTrace Contributors
//
// SPDX-License-Identifier: MIT

//! WorkTrace API Server
//!
//! Multi-tier business API for the WorkTrace platform.

use anyhow::Result;
use api::{AppConfig, Server, ShutdownConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Local development convenience; deployed environments set real variables
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting WorkTrace API server");

    // Resolution is total: missing or malformed variables fall back to
    // defaults instead of aborting startup.
    let config = AppConfig::from_env();

    let server = Server::new(config, ShutdownConfig::default())?;

    // NOTE: the `#[tokio::main]` task does not run a worker future, we must spawn
    tokio::spawn(async move { server.run().await }).await??;

    Ok(())
}
