//! Route and middleware wiring

use crate::handlers::{delete_folder, delete_media, upload_media};
use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use cloudpipe_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Headroom for multipart boundaries and non-file form parts on top of the
/// configured file size limit.
const UPLOAD_BODY_SLACK_BYTES: usize = 64 * 1024;

pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router> {
    let cors = setup_cors(config)?;
    let body_limit = config.max_file_size_bytes + UPLOAD_BODY_SLACK_BYTES;

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/v0/media", post(upload_media))
        // Public identifiers and folder prefixes may contain '/' segments.
        .route("/api/v0/media/{*asset_id}", delete(delete_media))
        .route("/api/v0/folders/{*prefix}", delete(delete_folder))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// Liveness probe - process is running.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "alive" }))
}

fn setup_cors(config: &Config) -> Result<CorsLayer> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Ok(cors)
}
