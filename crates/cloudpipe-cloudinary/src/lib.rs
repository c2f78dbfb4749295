//! Cloudinary client crate
//!
//! The remote provider sits behind the [`CloudinaryApi`] trait so the upload
//! service can be exercised against a stub. [`CloudinaryClient`] is the real
//! implementation, speaking Cloudinary's upload and admin REST APIs over
//! reqwest with SHA-256 request signing.

pub mod client;
pub mod params;
pub mod response;
pub mod signing;
pub mod traits;

pub use client::CloudinaryClient;
pub use params::upload_params;
pub use response::{BulkDeleteResponse, DestroyResponse, RemoteAsset};
pub use traits::{CloudinaryApi, ProviderError, ProviderResult};
