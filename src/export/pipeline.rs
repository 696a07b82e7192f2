use std::{fmt, path::PathBuf, sync::Arc};

use super::{
    dependencies::{ExportDependencies, ExportFileSaver, ShareSink},
    file::FileSaveConfig,
    types::{ExportError, ExportResult},
};
use tokio::task;

#[derive(Clone)]
pub(crate) struct ExportRequest {
    pub(crate) snapshot: Vec<u8>,
    pub(crate) style: Option<String>,
    pub(crate) save_config: FileSaveConfig,
    pub(crate) share: bool,
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("snapshot_bytes", &self.snapshot.len())
            .field("style", &self.style)
            .field("save_config", &self.save_config.filename_template)
            .field("share", &self.share)
            .finish()
    }
}

pub(crate) async fn perform_export(
    request: ExportRequest,
    dependencies: Arc<ExportDependencies>,
) -> Result<ExportResult, ExportError> {
    log::info!(
        "Starting export ({} bytes, style={:?}, share={})",
        request.snapshot.len(),
        request.style,
        request.share
    );

    // Step 1: optionally re-render through the style-transfer service
    let (image_data, styled) = match &request.style {
        Some(style) => {
            let styled_bytes = dependencies
                .backend
                .stylize(&request.snapshot, style)
                .await?;
            (styled_bytes, true)
        }
        None => (request.snapshot.clone(), false),
    };

    // Step 2: save to the gallery directory
    let saved_path = save_image(
        Arc::clone(&dependencies.saver),
        image_data,
        request.save_config.clone(),
    )
    .await?;

    // Step 3: hand off for sharing (if requested)
    let shared = if request.share {
        log::info!("Sharing exported drawing {}", saved_path.display());
        share_file(Arc::clone(&dependencies.sharer), saved_path.clone()).await
    } else {
        log::debug!("Share not requested for this export");
        false
    };

    Ok(ExportResult {
        saved_path,
        styled,
        shared,
    })
}

async fn save_image(
    saver: Arc<dyn ExportFileSaver>,
    image_data: Vec<u8>,
    config: FileSaveConfig,
) -> Result<PathBuf, ExportError> {
    task::spawn_blocking(move || saver.save(&image_data, &config))
        .await
        .map_err(|e| ExportError::TaskFailed(format!("save task failed: {}", e)))?
}

async fn share_file(sharer: Arc<dyn ShareSink>, path: PathBuf) -> bool {
    match task::spawn_blocking(move || sharer.share(&path))
        .await
        .map_err(|e| ExportError::TaskFailed(format!("share task failed: {}", e)))
    {
        Ok(Ok(())) => {
            log::info!("Share hand-off succeeded");
            true
        }
        Ok(Err(e)) | Err(e) => {
            log::error!("Share hand-off failed: {}", e);
            false
        }
    }
}
