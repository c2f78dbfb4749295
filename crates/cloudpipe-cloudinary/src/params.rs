//! Option-to-parameter translation
//!
//! Maps [`UploadOptions`] fields 1:1 onto Cloudinary upload parameters. Unset
//! optional fields are omitted from the map entirely (never sent as empty
//! values that could override provider defaults).
//!
//! `resource_type` is not part of the map: Cloudinary takes it as a URL path
//! segment, not a form field. `delete_local_file` is local-only and never
//! leaves the process.

use cloudpipe_core::UploadOptions;
use std::collections::BTreeMap;

/// Build the provider parameter map for an upload call.
pub fn upload_params(options: &UploadOptions) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    params.insert("folder".to_string(), options.folder.clone());

    if let Some(ref format) = options.format {
        params.insert("format".to_string(), format.clone());
    }
    if let Some(crop) = options.crop {
        params.insert("crop".to_string(), crop.as_str().to_string());
    }
    if let Some(width) = options.width {
        params.insert("width".to_string(), width.to_string());
    }
    if let Some(height) = options.height {
        params.insert("height".to_string(), height.to_string());
    }
    if let Some(ref aspect_ratio) = options.aspect_ratio {
        params.insert("aspect_ratio".to_string(), aspect_ratio.clone());
    }
    if let Some(gravity) = options.gravity {
        params.insert("gravity".to_string(), gravity.as_str().to_string());
    }
    if let Some(x) = options.x {
        params.insert("x".to_string(), x.to_string());
    }
    if let Some(y) = options.y {
        params.insert("y".to_string(), y.to_string());
    }
    if let Some(zoom) = options.zoom {
        params.insert("zoom".to_string(), zoom.to_string());
    }
    if let Some(effect) = options.effect {
        params.insert("effect".to_string(), effect.as_str().to_string());
    }
    if let Some(ref radius) = options.radius {
        params.insert("radius".to_string(), radius.as_param());
    }
    if let Some(angle) = options.angle {
        params.insert("angle".to_string(), angle.to_string());
    }

    params
}
