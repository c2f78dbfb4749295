//! Error types module
//!
//! This module provides the core error types used throughout the application.
//! Provider-call failures are deliberately flat: one fixed-message variant per
//! remote operation, with the underlying cause kept as a wrapped source for
//! observability rather than being discarded.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "UPLOAD_FAILED")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The remote upload call failed, for any reason. The fixed message is the
    /// whole contract; the cause survives only as the source chain.
    #[error("cloud upload failed")]
    UploadFailed {
        #[source]
        source: anyhow::Error,
    },

    /// The remote single-asset destroy call failed, for any reason.
    #[error("cloud asset deletion failed")]
    AssetDeletionFailed {
        #[source]
        source: anyhow::Error,
    },

    /// The remote delete-by-prefix call failed, for any reason.
    #[error("cloud folder deletion failed")]
    FolderDeletionFailed {
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::UploadFailed { .. } => (502, "UPLOAD_FAILED", true, LogLevel::Error),
        AppError::AssetDeletionFailed { .. } => (502, "ASSET_DELETION_FAILED", true, LogLevel::Error),
        AppError::FolderDeletionFailed { .. } => {
            (502, "FOLDER_DELETION_FAILED", true, LogLevel::Error)
        }
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", false, LogLevel::Debug),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::UploadFailed { .. } => "UploadFailed",
            AppError::AssetDeletionFailed { .. } => "AssetDeletionFailed",
            AppError::FolderDeletionFailed { .. } => "FolderDeletionFailed",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Get detailed error information including the source chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            // Fixed messages; provider detail stays in the source chain and logs.
            AppError::UploadFailed { .. } => "cloud upload failed".to_string(),
            AppError::AssetDeletionFailed { .. } => "cloud asset deletion failed".to_string(),
            AppError::FolderDeletionFailed { .. } => "cloud folder deletion failed".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_failed_metadata() {
        let err = AppError::UploadFailed {
            source: anyhow::anyhow!("connection reset"),
        };
        assert_eq!(err.http_status_code(), 502);
        assert_eq!(err.error_code(), "UPLOAD_FAILED");
        assert!(err.is_recoverable());
        assert_eq!(err.client_message(), "cloud upload failed");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_fixed_message_hides_cause() {
        let err = AppError::AssetDeletionFailed {
            source: anyhow::anyhow!("asset not found"),
        };
        assert_eq!(err.to_string(), "cloud asset deletion failed");
        assert!(err.detailed_message().contains("asset not found"));
    }

    #[test]
    fn test_invalid_input_metadata() {
        let err = AppError::InvalidInput("No file provided".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(!err.is_recoverable());
        assert_eq!(err.client_message(), "No file provided");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }
}
