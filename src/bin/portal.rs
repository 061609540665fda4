// src/bin/portal.rs

use std::sync::Arc;

use anyhow::Context;
use provenance_portal::transport;
use provenance_portal::{LedgerClient, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "provenance_portal=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let settings = Settings::from_env().context("invalid portal configuration")?;
    println!("> Ledger backend: {}", settings.ledger_api_url);
    println!("> Producer identity: {}", settings.producer_id);
    println!("> QR codes link to: {}/verify/<id>", settings.public_url);

    // --- Ledger Client Initialization ---
    let ledger = LedgerClient::new(&settings.ledger_api_url)?;
    let app_state = transport::http::AppState::new(
        Arc::new(ledger),
        settings.producer_id.clone(),
        settings.public_url.clone(),
    );

    // --- Portal Server Initialization ---
    let app = transport::http::create_router(app_state);
    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    println!("> Portal listening on http://{}", settings.bind_addr);
    println!("> Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            println!("\n> Shutdown signal received (Ctrl+C)...");
        })
        .await?;

    println!("> Portal stopped.");
    Ok(())
}
