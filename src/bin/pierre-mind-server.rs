// ABOUTME: Server binary for the Pierre Mind conversational triage API
// ABOUTME: Loads environment configuration, builds shared resources, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pierre Mind Server Binary
//!
//! Starts the triage HTTP API. Without `GEMINI_API_KEY` the server still starts
//! and answers every generation request with the degraded reply.

use std::future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use pierre_mind_server::{
    config::ServerConfig, constants::routes, logging, resources::TriageResources,
    routes::build_router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pierre-mind-server")]
#[command(about = "Pierre Mind - Conversational triage API for a wellness companion")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Pierre Mind Server");
    info!("{}", config.summary());

    let resources = Arc::new(TriageResources::from_config(&config)?);
    check_provider(&resources).await;
    let app = build_router(resources, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

    display_available_endpoints(config.http_port);
    info!("Server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when Ctrl+C is received
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {e}");
        // Without a handler, run until the process is killed
        future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}

/// Check the model credential once at startup; failures only warn
async fn check_provider(resources: &TriageResources) {
    let Some(provider) = resources.bridge.provider() else {
        warn!("GEMINI_API_KEY not set, serving degraded replies only");
        return;
    };
    match provider.health_check().await {
        Ok(true) => info!(provider = provider.name(), "Generative provider reachable"),
        Ok(false) => warn!(
            provider = provider.name(),
            "Generative provider rejected the credential"
        ),
        Err(e) => warn!(provider = provider.name(), "Generative provider health check failed: {e}"),
    }
}

/// Log every endpoint the server exposes
fn display_available_endpoints(port: u16) {
    let host = format!("http://localhost:{port}");
    info!("=== Available API Endpoints ===");
    info!("  POST {host}{}", routes::CHAT);
    info!("  POST {host}{}", routes::MOOD_ANALYZE);
    info!("  POST {host}{}", routes::INSIGHTS);
    info!("  POST {host}{}", routes::VALIDATE);
    info!("  GET  {host}{}", routes::HEALTH);
    info!("  GET  {host}{}", routes::READY);
}
