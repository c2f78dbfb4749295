//! Application setup and initialization
//!
//! All initialization logic lives here instead of main.rs: configuration
//! validation, staging directory creation, provider client construction,
//! and route wiring.

pub mod routes;
pub mod server;

use crate::services::CloudMediaService;
use crate::state::AppState;
use anyhow::{Context, Result};
use cloudpipe_cloudinary::CloudinaryClient;
use cloudpipe_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    tokio::fs::create_dir_all(&config.upload_dest)
        .await
        .with_context(|| {
            format!(
                "Failed to create staging directory {}",
                config.upload_dest.display()
            )
        })?;

    tracing::info!("Configuration loaded and validated successfully");

    let provider = Arc::new(CloudinaryClient::new(
        config.cloud_name.clone(),
        config.api_key.clone(),
        config.api_secret.clone(),
    ));
    let media = CloudMediaService::new(provider);

    let state = Arc::new(AppState {
        config: config.clone(),
        media,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
