//! Provider response types
//!
//! These are pass-through values: the service does not interpret or transform
//! any field. Fields this repo does not model explicitly survive in the
//! flattened `extra` map so responses reach API clients unmodified.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptor returned by the provider for a successfully uploaded asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteAsset {
    /// Public identifier, used for later deletion.
    pub public_id: String,
    /// Retrievable URL of the asset.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result of a single-asset destroy call, e.g. `{"result": "ok"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestroyResponse {
    pub result: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result of a delete-by-prefix call: per-asset outcomes keyed by public id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub deleted: HashMap<String, String>,
    #[serde(default)]
    pub partial: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
