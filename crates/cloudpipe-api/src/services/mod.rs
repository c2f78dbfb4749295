//! Service layer

pub mod cloud_media;

pub use cloud_media::CloudMediaService;
