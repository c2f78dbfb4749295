//! Deletion handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::error::HttpAppError;
use crate::state::AppState;

/// Delete one remote asset by public identifier.
///
/// The identifier may contain `/` segments (e.g. `avatars/abc`), hence the
/// wildcard capture in the route.
#[tracing::instrument(skip(state), fields(operation = "delete_media"))]
pub async fn delete_media(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let result = state
        .media
        .delete_file_cloud(&asset_id)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(result))
}

/// Delete all remote assets under a folder prefix.
#[tracing::instrument(skip(state), fields(operation = "delete_folder"))]
pub async fn delete_folder(
    State(state): State<Arc<AppState>>,
    Path(prefix): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let result = state
        .media
        .delete_folder(&prefix)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(result))
}
