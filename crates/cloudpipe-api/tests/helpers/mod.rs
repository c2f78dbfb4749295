//! Shared test helpers: a recording stub provider and fixture builders.
#![allow(dead_code)]

use async_trait::async_trait;
use cloudpipe_cloudinary::{
    BulkDeleteResponse, CloudinaryApi, DestroyResponse, ProviderError, ProviderResult, RemoteAsset,
};
use cloudpipe_core::ResourceType;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One recorded upload call as the service issued it.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub file_path: PathBuf,
    pub resource_type: ResourceType,
    pub params: BTreeMap<String, String>,
}

/// Stub provider: records every call and returns canned responses, or fails
/// every call with a simulated provider error.
pub struct StubCloudinary {
    fail: bool,
    asset: RemoteAsset,
    destroy_response: DestroyResponse,
    bulk_response: BulkDeleteResponse,
    pub uploads: Mutex<Vec<RecordedUpload>>,
    pub destroys: Mutex<Vec<String>>,
    pub prefix_deletes: Mutex<Vec<String>>,
}

impl StubCloudinary {
    /// Stub whose upload call resolves with the given descriptor.
    pub fn returning(asset: RemoteAsset) -> Self {
        StubCloudinary {
            fail: false,
            asset,
            destroy_response: destroy_response("ok"),
            bulk_response: bulk_response(&[("stub/a", "deleted")]),
            uploads: Mutex::new(Vec::new()),
            destroys: Mutex::new(Vec::new()),
            prefix_deletes: Mutex::new(Vec::new()),
        }
    }

    pub fn ok() -> Self {
        Self::returning(asset("stub/id", "https://stub/id.png"))
    }

    /// Stub where every provider call fails.
    pub fn failing() -> Self {
        let mut stub = Self::ok();
        stub.fail = true;
        stub
    }

    pub fn with_bulk_response(mut self, response: BulkDeleteResponse) -> Self {
        self.bulk_response = response;
        self
    }

    fn simulated_error() -> ProviderError {
        ProviderError::Api {
            status: 400,
            message: "simulated provider failure".to_string(),
        }
    }
}

#[async_trait]
impl CloudinaryApi for StubCloudinary {
    async fn upload(
        &self,
        file_path: &Path,
        resource_type: ResourceType,
        params: BTreeMap<String, String>,
    ) -> ProviderResult<RemoteAsset> {
        self.uploads.lock().unwrap().push(RecordedUpload {
            file_path: file_path.to_path_buf(),
            resource_type,
            params,
        });
        if self.fail {
            return Err(Self::simulated_error());
        }
        Ok(self.asset.clone())
    }

    async fn destroy(&self, public_id: &str) -> ProviderResult<DestroyResponse> {
        self.destroys.lock().unwrap().push(public_id.to_string());
        if self.fail {
            return Err(Self::simulated_error());
        }
        Ok(self.destroy_response.clone())
    }

    async fn delete_by_prefix(&self, prefix: &str) -> ProviderResult<BulkDeleteResponse> {
        self.prefix_deletes.lock().unwrap().push(prefix.to_string());
        if self.fail {
            return Err(Self::simulated_error());
        }
        Ok(self.bulk_response.clone())
    }
}

/// Minimal provider descriptor, as Cloudinary would return it.
pub fn asset(public_id: &str, url: &str) -> RemoteAsset {
    serde_json::from_value(serde_json::json!({ "public_id": public_id, "url": url })).unwrap()
}

pub fn destroy_response(result: &str) -> DestroyResponse {
    serde_json::from_value(serde_json::json!({ "result": result })).unwrap()
}

pub fn bulk_response(outcomes: &[(&str, &str)]) -> BulkDeleteResponse {
    let deleted: serde_json::Map<String, serde_json::Value> = outcomes
        .iter()
        .map(|(id, outcome)| (id.to_string(), serde_json::Value::from(*outcome)))
        .collect();
    serde_json::from_value(serde_json::json!({ "deleted": deleted, "partial": false })).unwrap()
}
