//! Staged file handle
//!
//! A file written to the local staging directory for the duration of one
//! request. Ownership follows the request lifecycle: the upload service
//! removes it when asked to, otherwise it is left for the caller or the OS.

use std::path::PathBuf;

/// Handle to an uploaded file staged on local disk.
#[derive(Debug, Clone)]
pub struct StagedFile {
    /// Absolute or destination-relative path of the staged copy.
    pub path: PathBuf,
    /// Filename as supplied by the client, unmodified.
    pub original_filename: String,
    /// MIME type as supplied by the client.
    pub content_type: String,
    /// Size of the staged copy in bytes.
    pub size: u64,
}
