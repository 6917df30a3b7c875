//! Server configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the server can start with zero
//! configuration for local development. Without `AI_API_KEY` the server
//! runs in fallback-only mode.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP (axum) API server.
    /// Env: `HTTP_ADDR`
    /// Default: `0.0.0.0:8080`
    pub http_addr: SocketAddr,

    /// Filesystem path of the SQLite database.
    /// Env: `DB_PATH`
    /// Default: `./moodmash.db`
    pub db_path: PathBuf,

    /// API key for the generative-text endpoint.
    /// Env: `AI_API_KEY`
    /// Default: unset (fallback-only generation).
    pub ai_api_key: Option<String>,

    /// Chat-completions endpoint URL.
    /// Env: `AI_API_URL`
    /// Default: `https://api.openai.com/v1/chat/completions`
    pub ai_api_url: String,

    /// Model requested from the generative-text endpoint.
    /// Env: `AI_MODEL`
    /// Default: `gpt-4o-mini`
    pub ai_model: String,

    /// Upper bound for client-supplied query limits.
    /// Env: `MAX_QUERY_LIMIT`
    /// Default: `50`
    pub max_query_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], 8080).into(),
            db_path: PathBuf::from("./moodmash.db"),
            ai_api_key: None,
            ai_api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            ai_model: "gpt-4o-mini".to_string(),
            max_query_limit: 50,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("HTTP_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(
                    value = %addr,
                    "Invalid HTTP_ADDR, using default"
                );
            }
        }

        if let Ok(path) = std::env::var("DB_PATH") {
            config.db_path = PathBuf::from(path);
        }

        if let Ok(key) = std::env::var("AI_API_KEY") {
            if !key.is_empty() {
                config.ai_api_key = Some(key);
            }
        }

        if let Ok(url) = std::env::var("AI_API_URL") {
            config.ai_api_url = url;
        }

        if let Ok(model) = std::env::var("AI_MODEL") {
            config.ai_model = model;
        }

        if let Ok(val) = std::env::var("MAX_QUERY_LIMIT") {
            if let Ok(n) = val.parse::<u32>() {
                config.max_query_limit = n;
            } else {
                tracing::warn!(
                    value = %val,
                    "Invalid MAX_QUERY_LIMIT, using default"
                );
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
