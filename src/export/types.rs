//! Data types for canvas export and style transfer.

use std::path::PathBuf;
use thiserror::Error;

/// Result of a completed export operation.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Path the drawing was saved to.
    pub saved_path: PathBuf,
    /// Whether the image went through the style-transfer service first.
    pub styled: bool,
    /// Whether the share hand-off succeeded.
    pub shared: bool,
}

/// Outcome of an export request (success or failure).
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Success(ExportResult),
    Failed(String),
}

/// Errors that can occur during export or style transfer.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Style service unreachable: {0}")]
    Backend(String),

    #[error("Style service returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to save drawing: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Share hand-off failed: {0}")]
    ShareError(String),

    #[error("Export task failed: {0}")]
    TaskFailed(String),
}

/// Status of an ongoing export operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// No export running.
    Idle,
    /// Export (and possibly the remote style call) is in flight.
    InProgress,
    /// Last export completed successfully.
    Success,
    /// Last export failed.
    Failed(String),
}
