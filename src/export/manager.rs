use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use super::{
    dependencies::ExportDependencies,
    file::FileSaveConfig,
    pipeline::{ExportRequest, perform_export},
    types::{ExportError, ExportOutcome, ExportStatus},
};

/// Shared state for managing async export operations.
///
/// This structure bridges the async style-transfer world with the
/// synchronous gesture loop: requests are queued without blocking, and
/// hosts poll for outcomes between frames.
#[derive(Clone)]
pub struct ExportManager {
    /// Channel for sending export requests.
    request_tx: mpsc::UnboundedSender<ExportRequest>,
    /// Shared status of the current export operation.
    status: Arc<Mutex<ExportStatus>>,
    /// Shared result of the last export (if any).
    last_result: Arc<Mutex<Option<ExportOutcome>>>,
}

impl ExportManager {
    /// Create a new export manager.
    ///
    /// This spawns a background task that drains export requests.
    ///
    /// # Arguments
    /// * `runtime_handle` - Tokio runtime handle for spawning async tasks
    /// * `dependencies` - Backend/saver/share implementations (mockable in
    ///   tests)
    pub fn new(runtime_handle: &tokio::runtime::Handle, dependencies: ExportDependencies) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ExportRequest>();
        let status = Arc::new(Mutex::new(ExportStatus::Idle));
        let last_result = Arc::new(Mutex::new(None));
        let dependencies = Arc::new(dependencies);

        let status_clone = status.clone();
        let result_clone = last_result.clone();
        let deps_clone = dependencies.clone();

        runtime_handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                log::debug!("Processing export request: {:?}", request);

                *status_clone.lock().await = ExportStatus::InProgress;

                match perform_export(request, deps_clone.clone()).await {
                    Ok(result) => {
                        log::info!("Export successful: {}", result.saved_path.display());
                        *status_clone.lock().await = ExportStatus::Success;
                        *result_clone.lock().await = Some(ExportOutcome::Success(result));
                    }
                    Err(e) => {
                        let error_message = e.to_string();
                        log::error!("Export failed: {}", error_message);
                        *status_clone.lock().await = ExportStatus::Failed(error_message.clone());
                        *result_clone.lock().await = Some(ExportOutcome::Failed(error_message));
                    }
                }
            }
        });

        Self {
            request_tx,
            status,
            last_result,
        }
    }

    /// Request an export of the given rendered snapshot.
    ///
    /// This is non-blocking and returns immediately; the (possibly remote)
    /// work happens in the background. The caller renders the snapshot
    /// before calling so the canvas is never held across the async
    /// boundary.
    ///
    /// # Arguments
    /// * `snapshot` - Rendered canvas bytes
    /// * `style` - Style id for the remote service, or `None` for a plain
    ///   export
    /// * `save_config` - File save configuration
    /// * `share` - Whether to hand the saved file to the share command
    pub fn request_export(
        &self,
        snapshot: Vec<u8>,
        style: Option<String>,
        save_config: FileSaveConfig,
        share: bool,
    ) -> Result<(), ExportError> {
        let request = ExportRequest {
            snapshot,
            style,
            save_config,
            share,
        };

        self.request_tx
            .send(request)
            .map_err(|_| ExportError::TaskFailed("Export manager not running".to_string()))?;

        Ok(())
    }

    /// Get the current export status.
    pub async fn get_status(&self) -> ExportStatus {
        self.status.lock().await.clone()
    }

    /// Get the result of the last export and clear it.
    pub async fn take_result(&self) -> Option<ExportOutcome> {
        self.last_result.lock().await.take()
    }

    /// Try to get the result without waiting (non-blocking).
    pub fn try_take_result(&self) -> Option<ExportOutcome> {
        self.last_result.try_lock().ok().and_then(|mut r| r.take())
    }

    /// Reset status to idle.
    pub async fn reset(&self) {
        *self.status.lock().await = ExportStatus::Idle;
    }
}

#[cfg(test)]
impl ExportManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<ExportRequest>();
        drop(rx);
        Self {
            request_tx: tx,
            status: Arc::new(Mutex::new(ExportStatus::Idle)),
            last_result: Arc::new(Mutex::new(None)),
        }
    }
}
