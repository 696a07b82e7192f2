use super::options::SessionOptions;
use super::snapshot;
use anyhow::{Context, Result};
use fs2::FileExt;
use log::warn;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Result of clearing on-disk session data.
#[derive(Debug, Clone, Copy)]
pub struct ClearOutcome {
    pub removed_session: bool,
    pub removed_backup: bool,
    pub removed_lock: bool,
}

/// Summary information about the current session file(s).
#[derive(Debug, Clone)]
pub struct SessionInspection {
    pub session_path: PathBuf,
    pub exists: bool,
    pub size_bytes: Option<u64>,
    pub modified: Option<SystemTime>,
    pub backup_path: PathBuf,
    pub backup_exists: bool,
    pub backup_size_bytes: Option<u64>,
    pub persist_scene: bool,
    pub restore_tool_state: bool,
    pub entity_counts: Option<EntityCounts>,
    pub tool_state_present: bool,
    pub compressed: bool,
}

/// Entity counts stored in the session scene.
#[derive(Debug, Clone, Copy)]
pub struct EntityCounts {
    pub strokes: usize,
    pub shapes: usize,
    pub has_background: bool,
}

/// Remove persisted session files (session, backup, and lock).
pub fn clear_session(options: &SessionOptions) -> Result<ClearOutcome> {
    let removed_session = remove_file_if_exists(&options.session_file_path())?;
    let removed_backup = remove_file_if_exists(&options.backup_file_path())?;
    let removed_lock = remove_file_if_exists(&options.lock_file_path())?;

    Ok(ClearOutcome {
        removed_session,
        removed_backup,
        removed_lock,
    })
}

/// Inspect the current session file for CLI reporting.
pub fn inspect_session(options: &SessionOptions) -> Result<SessionInspection> {
    let session_path = options.session_file_path();
    let metadata = fs::metadata(&session_path).ok();

    let exists = metadata.is_some();
    let size_bytes = metadata.as_ref().map(|m| m.len());
    let modified = metadata.as_ref().and_then(|m| m.modified().ok());

    let backup_path = options.backup_file_path();
    let backup_meta = fs::metadata(&backup_path).ok();
    let backup_exists = backup_meta.is_some();
    let backup_size = backup_meta.as_ref().map(|m| m.len());

    let mut entity_counts = None;
    let mut tool_state_present = false;
    let mut compressed = false;

    if exists {
        let lock_path = options.lock_file_path();
        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&lock_path)
            .with_context(|| format!("failed to open session lock file {}", lock_path.display()))?;
        lock_file
            .lock_shared()
            .with_context(|| format!("failed to acquire shared lock {}", lock_path.display()))?;

        let loaded = snapshot::load_snapshot_inner(&session_path, options);

        lock_file.unlock().unwrap_or_else(|err| {
            warn!(
                "failed to unlock session file {}: {}",
                lock_path.display(),
                err
            )
        });

        if let Some(loaded) = loaded? {
            entity_counts = Some(EntityCounts {
                strokes: loaded.snapshot.scene.strokes.len(),
                shapes: loaded.snapshot.scene.shapes.len(),
                has_background: loaded.snapshot.scene.background.is_some(),
            });
            tool_state_present = loaded.snapshot.tool_state.is_some();
            compressed = loaded.compressed;
        }
    }

    Ok(SessionInspection {
        session_path,
        exists,
        size_bytes,
        modified,
        backup_path,
        backup_exists,
        backup_size_bytes: backup_size,
        persist_scene: options.persist_scene,
        restore_tool_state: options.restore_tool_state,
        entity_counts,
        tool_state_present,
        compressed,
    })
}

fn remove_file_if_exists(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("failed to remove {}", path.display()))?;
        Ok(true)
    } else {
        Ok(false)
    }
}
