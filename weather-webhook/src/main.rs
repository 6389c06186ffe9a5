//! Binary crate for the weather fulfillment webhook.
//!
//! This crate focuses on:
//! - Loading server configuration
//! - Wiring the Open-Meteo provider into the HTTP handler
//! - Serving the webhook endpoint

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use weather_core::provider::open_meteo::OpenMeteoProvider;

mod config;
mod webhook;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::Config::load()?;

    let provider = match &config.open_meteo_base_url {
        Some(base_url) => OpenMeteoProvider::with_base_url(base_url),
        None => OpenMeteoProvider::new(),
    };

    let app = webhook::router(webhook::AppState {
        provider: Arc::new(provider),
    });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("weather webhook listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Webhook server terminated unexpectedly")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
