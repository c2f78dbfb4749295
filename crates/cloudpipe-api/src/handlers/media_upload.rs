//! Upload media handler

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cloudpipe_core::UploadOptions;

use crate::error::HttpAppError;
use crate::staging::{self, UPLOAD_FIELD};
use crate::state::AppState;

/// Upload a file to the remote provider.
///
/// Stages the `file` multipart field on local disk under the configured
/// destination, then forwards it to Cloudinary with the options given as
/// query parameters. Responds 201 with the provider's asset descriptor.
///
/// # Errors
/// - `AppError::InvalidInput` - malformed multipart or missing file field
/// - `AppError::PayloadTooLarge` - file exceeds the configured size limit
/// - `AppError::UploadFailed` - remote provider call failed
#[tracing::instrument(
    skip(state, multipart),
    fields(folder = %options.folder, operation = "upload_media")
)]
pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    Query(options): Query<UploadOptions>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let staged = staging::stage_multipart_file(
        multipart,
        &state.config.upload_dest,
        UPLOAD_FIELD,
        state.config.max_file_size_bytes,
    )
    .await
    .map_err(HttpAppError::from)?;

    let asset = state
        .media
        .upload_cloud(&staged, &options)
        .await
        .map_err(HttpAppError::from)?;

    Ok((StatusCode::CREATED, Json(asset)))
}
