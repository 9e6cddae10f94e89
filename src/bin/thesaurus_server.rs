//! thesaurus_server — HTTP server for word lookups.
//!
//! Reads config from flags or env vars (a `.env` file is loaded first):
//!   THESAURUS_LISTEN               — listen address (default: 0.0.0.0:3000)
//!   THESAURUS_DATAMUSE_URL         — Datamuse base URL
//!   THESAURUS_DICTIONARY_URL       — Free Dictionary base URL
//!   THESAURUS_UPSTREAM_TIMEOUT_MS  — per-call timeout (default: 10000)

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

use thesaurus::api::build_router;
use thesaurus::config::ServerConfig;
use thesaurus::Aggregator;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,thesaurus=debug,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::parse();

    let upstream = config.upstream();
    tracing::info!(
        datamuse = %upstream.datamuse_url,
        dictionary = %upstream.dictionary_url,
        timeout_ms = config.upstream_timeout_ms,
        "Starting thesaurus server"
    );

    let aggregator = Aggregator::from_config(&upstream)?;
    let app = build_router(aggregator);

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind to {}", config.listen))?;
    tracing::info!("thesaurus_server listening on {}", config.listen);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
