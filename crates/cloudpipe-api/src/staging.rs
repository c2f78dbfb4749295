//! Multipart upload staging
//!
//! Reads one uploaded file from a `multipart/form-data` request and writes it
//! to the configured staging directory before the business logic runs. The
//! file keeps its original name as supplied by the client: no renaming, no
//! collision handling, a same-named upload silently overwrites the previous
//! staged copy.

use axum::extract::Multipart;
use cloudpipe_core::{AppError, StagedFile};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Form field the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "file";

/// Extract the named file field from a multipart request and stage it on disk.
/// Exactly one field with `field_name` is accepted; files over `max_size`
/// bytes are rejected before anything is written.
pub async fn stage_multipart_file(
    mut multipart: Multipart,
    dest: &Path,
    field_name: &str,
    max_size: usize,
) -> Result<StagedFile, AppError> {
    let mut file: Option<(Vec<u8>, String, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if name == field_name {
            if file.is_some() {
                return Err(AppError::InvalidInput(format!(
                    "Multiple file fields are not allowed; send exactly one field named '{}'",
                    field_name
                )));
            }
            let filename = field
                .file_name()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let content_type = field
                .content_type()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            if data.len() > max_size {
                return Err(AppError::PayloadTooLarge(format!(
                    "File '{}' is {} bytes; the limit is {} bytes",
                    filename,
                    data.len(),
                    max_size
                )));
            }

            file = Some((data.to_vec(), filename, content_type));
        }
    }

    let (data, filename, content_type) =
        file.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;

    write_staged(dest, &filename, &content_type, data).await
}

/// Write file data under `dest` using the client-supplied filename verbatim.
pub async fn write_staged(
    dest: &Path,
    original_filename: &str,
    content_type: &str,
    data: Vec<u8>,
) -> Result<StagedFile, AppError> {
    fs::create_dir_all(dest).await.map_err(|e| {
        AppError::Internal(format!(
            "Failed to create staging directory {}: {}",
            dest.display(),
            e
        ))
    })?;

    let path = dest.join(original_filename);
    let size = data.len() as u64;

    let mut file = fs::File::create(&path).await.map_err(|e| {
        AppError::Internal(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    file.write_all(&data).await.map_err(|e| {
        AppError::Internal(format!("Failed to write file {}: {}", path.display(), e))
    })?;

    file.sync_all().await.map_err(|e| {
        AppError::Internal(format!("Failed to sync file {}: {}", path.display(), e))
    })?;

    tracing::debug!(
        path = %path.display(),
        size_bytes = size,
        content_type = %content_type,
        "Staged uploaded file"
    );

    Ok(StagedFile {
        path,
        original_filename: original_filename.to_string(),
        content_type: content_type.to_string(),
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn write_staged_keeps_original_filename() {
        let dir = tempdir().unwrap();
        let staged = write_staged(dir.path(), "photo.png", "image/png", b"data".to_vec())
            .await
            .unwrap();

        assert_eq!(staged.path, dir.path().join("photo.png"));
        assert_eq!(staged.original_filename, "photo.png");
        assert_eq!(staged.content_type, "image/png");
        assert_eq!(staged.size, 4);
        assert_eq!(std::fs::read(&staged.path).unwrap(), b"data");
    }

    #[tokio::test]
    async fn write_staged_silently_overwrites_same_name() {
        let dir = tempdir().unwrap();
        write_staged(dir.path(), "a.txt", "text/plain", b"first".to_vec())
            .await
            .unwrap();
        let staged = write_staged(dir.path(), "a.txt", "text/plain", b"second".to_vec())
            .await
            .unwrap();

        assert_eq!(std::fs::read(&staged.path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn write_staged_creates_missing_destination() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("uploads");
        let staged = write_staged(&dest, "b.bin", "application/octet-stream", vec![0u8; 16])
            .await
            .unwrap();

        assert!(staged.path.starts_with(&dest));
        assert_eq!(staged.size, 16);
    }
}
