//! Snapshot persistence for the caffeine timeline.
//!
//! The store owns exactly one artifact: the session snapshot documented in
//! [`caff_core::Snapshot`], kept as a single JSON file. The engine itself
//! never touches the filesystem; it rehydrates from a snapshot handed to it
//! and produces one on demand; this crate is the collaborator that moves the
//! snapshot to and from disk.
//!
//! Malformed snapshot data is caught here, at the load boundary, and surfaced
//! as a typed error. The core assumes well-formed input once handed to it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use caff_core::Snapshot;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    /// The snapshot file exists but does not parse as the documented shape.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed store for the session snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store over the given snapshot path. Nothing is read or
    /// created until [`load`](Self::load) or [`save`](Self::save) is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted snapshot, or `None` when no file exists yet.
    pub fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot = serde_json::from_str(&contents)?;
        tracing::debug!(path = %self.path.display(), "snapshot loaded");
        Ok(Some(snapshot))
    }

    /// Writes the snapshot, creating parent directories as needed.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(snapshot)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}
