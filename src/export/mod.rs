//! Canvas export functionality for fingerpaint.
//!
//! This module covers everything that happens to a rendered canvas
//! snapshot after the user taps save, share, or an AI style:
//! - Remote style transfer over HTTP (image in, styled image out)
//! - Saving to the gallery directory with templated filenames
//! - Handing the saved file to an external share command
//!
//! The canvas itself is never touched here; callers render a snapshot
//! first and queue it, so gesture handling stays unblocked.

pub mod file;
pub mod remote;
pub mod share;
pub mod types;

mod dependencies;
mod manager;
mod pipeline;
#[cfg(test)]
mod tests;

pub use dependencies::{ExportDependencies, ExportFileSaver, ShareSink, StyleBackend};
pub use manager::ExportManager;
#[allow(unused_imports)]
pub use types::{ExportError, ExportOutcome, ExportResult, ExportStatus};

use file::FileSaveConfig;
use std::sync::Arc;

/// Runs one export to completion, without going through a manager queue.
///
/// Used by one-shot hosts (the CLI); interactive hosts should prefer
/// [`ExportManager`] so gesture handling keeps running.
pub async fn run_export(
    snapshot: Vec<u8>,
    style: Option<String>,
    save_config: FileSaveConfig,
    share: bool,
    dependencies: ExportDependencies,
) -> Result<ExportResult, ExportError> {
    pipeline::perform_export(
        pipeline::ExportRequest {
            snapshot,
            style,
            save_config,
            share,
        },
        Arc::new(dependencies),
    )
    .await
}
