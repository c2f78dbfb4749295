//! Provider abstraction trait
//!
//! This module defines the trait the upload service calls through, and the
//! error type for provider operations.

use crate::response::{BulkDeleteResponse, DestroyResponse, RemoteAsset};
use async_trait::async_trait;
use cloudpipe_core::ResourceType;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Provider operation errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("cloudinary returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Remote media provider abstraction.
///
/// Each method is a single request/response round trip with no retry and no
/// idempotency guarantee beyond what the provider itself offers. `params` for
/// uploads carries only the option fields; credentials, timestamp, and
/// signature are the implementation's concern.
#[async_trait]
pub trait CloudinaryApi: Send + Sync {
    /// Upload the file at `file_path` and return the provider's asset descriptor.
    async fn upload(
        &self,
        file_path: &Path,
        resource_type: ResourceType,
        params: BTreeMap<String, String>,
    ) -> ProviderResult<RemoteAsset>;

    /// Destroy one remote asset by its public identifier.
    async fn destroy(&self, public_id: &str) -> ProviderResult<DestroyResponse>;

    /// Delete all remote assets whose public identifier starts with `prefix`.
    async fn delete_by_prefix(&self, prefix: &str) -> ProviderResult<BulkDeleteResponse>;
}
