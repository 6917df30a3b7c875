use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Path, Query, State},
    http::Method,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use moodmash_core::{assemble_vibe, derive_vibe_type, reconcile, NormalizedHandle, VibeRecord};
use moodmash_store::{Database, SortOrder, VibeEntry};

use crate::ai::VibeGenerator;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::rate_limit::{rate_limit_middleware, RateLimiter};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
    pub generator: Option<Arc<VibeGenerator>>,
    pub rate_limiter: RateLimiter,
    pub config: Arc<ServerConfig>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate-vibe", post(generate_vibe))
        .route("/api/like-vibe/:id", post(like_vibe))
        .route("/api/popular-vibes", get(popular_vibes))
        .route("/api/vibes/:handle", get(vibes_for_handle))
        .route("/api/analytics", get(analytics))
        .layer(DefaultBodyLimit::max(16 * 1024))
        .layer(middleware::from_fn_with_state(
            state.rate_limiter.clone(),
            rate_limit_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateVibeRequest {
    twitter_handle: String,
}

#[derive(Serialize)]
struct GenerateVibeResponse {
    id: i64,
    vibe: VibeRecord,
}

#[derive(Deserialize)]
struct PopularVibesQuery {
    limit: Option<u32>,
    sort: Option<String>,
}

#[derive(Serialize)]
struct PopularVibesResponse {
    vibes: Vec<VibeEntry>,
}

#[derive(Deserialize)]
struct HandleVibesQuery {
    limit: Option<u32>,
}

#[derive(Serialize)]
struct AnalyticsResponse {
    count: i64,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The canonical generation pipeline:
/// validate -> classify -> generate-or-fallback -> reconcile -> persist.
async fn generate_vibe(
    State(state): State<AppState>,
    Json(req): Json<GenerateVibeRequest>,
) -> Result<Json<GenerateVibeResponse>, ServerError> {
    let handle = NormalizedHandle::parse(&req.twitter_handle)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    // The category is fixed here for the rest of the request. Generated
    // output is corrected to match it, never the reverse.
    let vibe_type = derive_vibe_type(&handle);
    let fallback = assemble_vibe(&handle, vibe_type);

    let record = match &state.generator {
        Some(generator) => match generator.generate(&handle).await {
            Ok(generated) => {
                if generated.vibe_type != vibe_type.as_str() {
                    debug!(
                        handle = %handle,
                        generated = %generated.vibe_type,
                        expected = %vibe_type,
                        "overriding generated category"
                    );
                }
                reconcile(generated, vibe_type, &fallback)
            }
            Err(e) => {
                warn!(handle = %handle, error = %e, "generation failed, using fallback");
                fallback
            }
        },
        None => fallback,
    };

    let entry = {
        let db = state.db.lock().await;
        db.insert_vibe(handle.as_str(), &record)?
    };

    info!(handle = %handle, id = entry.id, vibe = %entry.vibe.vibe_type, "vibe generated");

    Ok(Json(GenerateVibeResponse {
        id: entry.id,
        vibe: entry.vibe,
    }))
}

async fn like_vibe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ServerError> {
    if id <= 0 {
        return Err(ServerError::BadRequest(format!("Invalid id: {id}")));
    }

    let liked = {
        let db = state.db.lock().await;
        db.like_vibe(id)?
    };

    if !liked {
        return Err(ServerError::VibeNotFound(id));
    }

    debug!(id, "vibe liked");
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn popular_vibes(
    State(state): State<AppState>,
    Query(query): Query<PopularVibesQuery>,
) -> Result<Json<PopularVibesResponse>, ServerError> {
    let limit = query
        .limit
        .unwrap_or(10)
        .min(state.config.max_query_limit);
    let order = SortOrder::from_param(query.sort.as_deref().unwrap_or("recent"));

    let vibes = {
        let db = state.db.lock().await;
        db.top_vibes(limit, order)?
    };

    Ok(Json(PopularVibesResponse { vibes }))
}

async fn vibes_for_handle(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(query): Query<HandleVibesQuery>,
) -> Result<Json<PopularVibesResponse>, ServerError> {
    let handle = NormalizedHandle::parse(&handle)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;
    let limit = query.limit.unwrap_or(5).min(state.config.max_query_limit);

    let vibes = {
        let db = state.db.lock().await;
        db.vibes_for_handle(handle.as_str(), limit)?
    };

    Ok(Json(PopularVibesResponse { vibes }))
}

/// Total vibe count. Errors degrade to a zero count rather than a 5xx.
async fn analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let count = {
        let db = state.db.lock().await;
        match db.count_vibes() {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "vibe count failed");
                0
            }
        }
    };

    Json(AnalyticsResponse { count })
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
