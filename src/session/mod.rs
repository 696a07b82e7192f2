//! Session persistence (save/restore) support.
//!
//! Converts in-memory drawing state into a serialised representation, writes it
//! to disk with locking, optional compression, and backup rotation, and restores
//! the state on startup when requested.

mod options;
mod snapshot;
mod storage;

#[allow(unused_imports)]
pub use options::{
    CompressionMode, DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES, SessionOptions, options_from_config,
};
#[allow(unused_imports)]
pub use snapshot::{
    SessionSnapshot, apply_snapshot, load_snapshot, save_snapshot, snapshot_from_canvas,
};
#[allow(unused_imports)]
pub use storage::{ClearOutcome, EntityCounts, SessionInspection, clear_session, inspect_session};

#[cfg(test)]
mod tests;
