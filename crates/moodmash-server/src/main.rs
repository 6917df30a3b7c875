//! # moodmash-server
//!
//! HTTP server for Mood Mash, the handle-to-vibe generator.
//!
//! This binary provides:
//! - **REST API** (axum) for generating vibes, liking them, and reading
//!   the like-count leaderboard
//! - **Deterministic fallback generation** via `moodmash-core` whenever
//!   the generative-text collaborator is unconfigured or fails
//! - **SQLite persistence** via `moodmash-store`
//! - **Per-IP rate limiting** to protect against abuse

mod ai;
mod api;
mod config;
mod error;
mod rate_limit;

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use moodmash_store::Database;

use crate::ai::VibeGenerator;
use crate::api::AppState;
use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,moodmash_server=debug")),
        )
        .init();

    info!("Starting Mood Mash server v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(
        addr = %config.http_addr,
        db_path = %config.db_path.display(),
        ai_enabled = config.ai_api_key.is_some(),
        ai_model = %config.ai_model,
        "Loaded configuration"
    );

    // -----------------------------------------------------------------------
    // 3. Initialize subsystems
    // -----------------------------------------------------------------------

    // Database (creates the file and runs migrations if needed).
    let db = Arc::new(Mutex::new(Database::open_at(&config.db_path)?));

    // Generative-text client; absent means fallback-only generation.
    let generator = VibeGenerator::from_config(&config).map(Arc::new);
    if generator.is_none() {
        info!("No AI_API_KEY configured, running with deterministic fallback only");
    }

    // Rate limiter: 10 req/s sustained, burst of 30.
    let rate_limiter = RateLimiter::default();

    // Application state for the HTTP API.
    let app_state = AppState {
        db,
        generator,
        rate_limiter: rate_limiter.clone(),
        config: Arc::new(config.clone()),
    };

    // -----------------------------------------------------------------------
    // 4. Spawn background tasks
    // -----------------------------------------------------------------------

    // Periodic rate limiter cleanup (every 5 minutes, evict buckets idle >10 min).
    let rl = rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            rl.purge_stale(600.0).await;
        }
    });

    // -----------------------------------------------------------------------
    // 5. Run the HTTP API server (blocks until shutdown)
    // -----------------------------------------------------------------------
    // tokio::select! ensures that if either the HTTP server or a shutdown
    // signal arrives, we exit cleanly.
    let http_addr = config.http_addr;

    tokio::select! {
        result = api::serve(app_state, http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
