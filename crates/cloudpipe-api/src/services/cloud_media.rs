//! Upload/delete service
//!
//! Translates [`UploadOptions`] onto the provider's call signature, issues the
//! remote call, and optionally removes the now-redundant staged local copy.
//! Failures collapse into one fixed-message error per operation; the original
//! cause is logged and kept on the source chain.

use cloudpipe_cloudinary::{
    upload_params, BulkDeleteResponse, CloudinaryApi, DestroyResponse, RemoteAsset,
};
use cloudpipe_core::{AppError, ResourceType, StagedFile, UploadOptions};
use std::sync::Arc;

/// Service mapping internal upload/delete requests onto the remote provider.
///
/// Holds no mutable state; only the provider handle captured at construction.
#[derive(Clone)]
pub struct CloudMediaService {
    provider: Arc<dyn CloudinaryApi>,
}

impl CloudMediaService {
    pub fn new(provider: Arc<dyn CloudinaryApi>) -> Self {
        CloudMediaService { provider }
    }

    /// Upload a staged file to the provider.
    ///
    /// Every set option field passes through unmodified; unset fields are
    /// omitted so the provider applies its own defaults. When
    /// `options.delete_local_file` is set and the remote call succeeds, the
    /// staged copy is removed; a deletion failure at that point is non-fatal
    /// and only logged, since the remote upload already happened.
    #[tracing::instrument(skip(self, file, options), fields(folder = %options.folder, path = %file.path.display()))]
    pub async fn upload_cloud(
        &self,
        file: &StagedFile,
        options: &UploadOptions,
    ) -> Result<RemoteAsset, AppError> {
        let resource_type = options.resource_type.unwrap_or(ResourceType::Image);
        let params = upload_params(options);

        let asset = self
            .provider
            .upload(&file.path, resource_type, params)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Cloud upload failed");
                AppError::UploadFailed { source: e.into() }
            })?;

        if options.delete_local_file {
            if let Err(e) = tokio::fs::remove_file(&file.path).await {
                tracing::warn!(
                    error = %e,
                    path = %file.path.display(),
                    "Failed to remove staged file after successful upload"
                );
            }
        }

        Ok(asset)
    }

    /// Delete one remote asset by its public identifier.
    #[tracing::instrument(skip(self))]
    pub async fn delete_file_cloud(&self, asset_id: &str) -> Result<DestroyResponse, AppError> {
        self.provider
            .destroy(asset_id)
            .await
            .map_err(|e| AppError::AssetDeletionFailed { source: e.into() })
    }

    /// Delete all remote assets under a folder prefix.
    #[tracing::instrument(skip(self))]
    pub async fn delete_folder(&self, prefix: &str) -> Result<BulkDeleteResponse, AppError> {
        self.provider
            .delete_by_prefix(prefix)
            .await
            .map_err(|e| AppError::FolderDeletionFailed { source: e.into() })
    }
}
