//! Application state
//!
//! One state object shared by all handlers: the startup configuration
//! (read-only after construction) and the upload/delete service.

use crate::services::CloudMediaService;
use cloudpipe_core::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub media: CloudMediaService,
}
