//! Cloudpipe API Library
//!
//! This crate provides the HTTP surface: multipart upload staging, the
//! upload/delete service over the Cloudinary client, handlers, and
//! application setup.

pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod staging;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::CloudMediaService;
pub use state::AppState;
