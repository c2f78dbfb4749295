//! Cloudinary REST client
//!
//! Real [`CloudinaryApi`] implementation over reqwest. Upload and destroy go
//! through the signed upload API; delete-by-prefix goes through the admin API
//! with basic auth. Each call is one round trip, no retries.

use crate::response::{BulkDeleteResponse, DestroyResponse, RemoteAsset};
use crate::signing;
use crate::traits::{CloudinaryApi, ProviderError, ProviderResult};
use async_trait::async_trait;
use cloudpipe_core::ResourceType;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// Error body shape returned by Cloudinary, e.g. `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ApiErrorMessage {
    message: String,
}

/// Cloudinary API client.
#[derive(Clone)]
pub struct CloudinaryClient {
    cloud_name: String,
    api_key: String,
    api_secret: String,
    base_url: String,
    http: reqwest::Client,
}

impl CloudinaryClient {
    /// Create a client for one Cloudinary account.
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        CloudinaryClient {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Override the API base URL (local test endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn upload_url(&self, resource_type: ResourceType) -> String {
        format!(
            "{}/{}/{}/upload",
            self.base_url,
            self.cloud_name,
            resource_type.as_str()
        )
    }

    fn destroy_url(&self) -> String {
        // The destroy endpoint is resource-typed; "image" matches the
        // provider SDK default this service was built against.
        format!("{}/{}/image/destroy", self.base_url, self.cloud_name)
    }

    fn resources_url(&self) -> String {
        format!("{}/{}/resources/image/upload", self.base_url, self.cloud_name)
    }

    /// Add `timestamp` and compute the request signature over `params`.
    fn signed_params(&self, mut params: BTreeMap<String, String>) -> (BTreeMap<String, String>, String) {
        params.insert(
            "timestamp".to_string(),
            chrono::Utc::now().timestamp().to_string(),
        );
        let signature = signing::sign(&params, &self.api_secret);
        (params, signature)
    }

    async fn error_from_response(response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .map(|body| body.error.message)
            .unwrap_or(text);
        ProviderError::Api { status, message }
    }
}

#[async_trait]
impl CloudinaryApi for CloudinaryClient {
    async fn upload(
        &self,
        file_path: &Path,
        resource_type: ResourceType,
        params: BTreeMap<String, String>,
    ) -> ProviderResult<RemoteAsset> {
        let data = tokio::fs::read(file_path).await?;
        let size = data.len();
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());

        let (params, signature) = self.signed_params(params);

        let mut form = reqwest::multipart::Form::new();
        for (key, value) in &params {
            form = form.text(key.clone(), value.clone());
        }
        form = form
            .text("api_key", self.api_key.clone())
            .text("signature", signature)
            .part("file", reqwest::multipart::Part::bytes(data).file_name(file_name));

        let start = std::time::Instant::now();

        let response = self
            .http
            .post(self.upload_url(resource_type))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            tracing::error!(
                error = %err,
                path = %file_path.display(),
                resource_type = resource_type.as_str(),
                "Cloudinary upload rejected"
            );
            return Err(err);
        }

        let asset = response.json::<RemoteAsset>().await?;

        tracing::info!(
            public_id = %asset.public_id,
            path = %file_path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Cloudinary upload successful"
        );

        Ok(asset)
    }

    async fn destroy(&self, public_id: &str) -> ProviderResult<DestroyResponse> {
        let mut params = BTreeMap::new();
        params.insert("public_id".to_string(), public_id.to_string());
        let (mut params, signature) = self.signed_params(params);
        params.insert("api_key".to_string(), self.api_key.clone());
        params.insert("signature".to_string(), signature);

        let start = std::time::Instant::now();

        let response = self
            .http
            .post(self.destroy_url())
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let result = response.json::<DestroyResponse>().await?;

        tracing::info!(
            public_id = %public_id,
            result = %result.result,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Cloudinary destroy finished"
        );

        Ok(result)
    }

    async fn delete_by_prefix(&self, prefix: &str) -> ProviderResult<BulkDeleteResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http
            .delete(self.resources_url())
            .query(&[("prefix", prefix)])
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let result = response.json::<BulkDeleteResponse>().await?;

        tracing::info!(
            prefix = %prefix,
            deleted = result.deleted.len(),
            partial = result.partial,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Cloudinary delete-by-prefix finished"
        );

        Ok(result)
    }
}
