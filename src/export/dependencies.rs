use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;

use crate::config::{ExportConfig, StyleTransferConfig};

use super::{
    file::{self, FileSaveConfig},
    remote::HttpStyleBackend,
    share,
    types::ExportError,
};

/// Abstraction over the remote style-transfer service: rendered canvas
/// bytes in, styled image bytes out.
#[async_trait]
pub trait StyleBackend: Send + Sync {
    async fn stylize(&self, image: &[u8], style: &str) -> Result<Vec<u8>, ExportError>;
}

/// Abstraction over file saving for exported drawings.
pub trait ExportFileSaver: Send + Sync {
    fn save(&self, image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError>;
}

/// Abstraction over handing a saved drawing to the share flow.
pub trait ShareSink: Send + Sync {
    fn share(&self, path: &Path) -> Result<(), ExportError>;
}

/// Bundle of dependencies used by the export pipeline. Each component can
/// be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub backend: Arc<dyn StyleBackend>,
    pub saver: Arc<dyn ExportFileSaver>,
    pub sharer: Arc<dyn ShareSink>,
}

impl ExportDependencies {
    /// Builds the default dependency set from configuration.
    pub fn from_config(
        style: &StyleTransferConfig,
        export: &ExportConfig,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            backend: Arc::new(HttpStyleBackend::from_config(style)?),
            saver: Arc::new(DefaultFileSaver),
            sharer: Arc::new(CommandShareSink {
                command: export.share_command.clone(),
            }),
        })
    }
}

struct DefaultFileSaver;

struct CommandShareSink {
    command: Option<String>,
}

impl ExportFileSaver for DefaultFileSaver {
    fn save(&self, image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
        file::save_drawing(image_data, config)
    }
}

impl ShareSink for CommandShareSink {
    fn share(&self, path: &Path) -> Result<(), ExportError> {
        match &self.command {
            Some(command) => share::run_share_command(command, path),
            None => Err(ExportError::ShareError(
                "no share command configured".to_string(),
            )),
        }
    }
}
