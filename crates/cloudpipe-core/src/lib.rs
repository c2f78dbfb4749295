//! Cloudpipe Core Library
//!
//! This crate provides the configuration, error types, and upload option
//! models shared between the Cloudinary client and the API service.

pub mod config;
pub mod error;
pub mod options;
pub mod staged;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use options::{CropMode, Effect, Gravity, Radius, ResourceType, UploadOptions};
pub use staged::StagedFile;
