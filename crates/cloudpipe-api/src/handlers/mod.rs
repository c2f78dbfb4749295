//! HTTP handlers

pub mod media_delete;
pub mod media_upload;

pub use media_delete::{delete_folder, delete_media};
pub use media_upload::upload_media;
