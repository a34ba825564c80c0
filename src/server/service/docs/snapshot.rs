//! Flat-file persistence for the documentation snapshot.

use std::path::{Path, PathBuf};

use crate::server::{error::AppError, model::docs::Snapshot};

/// Reads and writes the snapshot as pretty-printed JSON at a fixed path.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot.
    ///
    /// A missing or unreadable file is not an error: the watcher treats it as "nothing
    /// seen yet" so every tracked document is reported on the next cycle.
    ///
    /// # Returns
    /// - `Snapshot` - Stored snapshot, or an empty one if it could not be loaded
    pub async fn load(&self) -> Snapshot {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(
                    "No docs snapshot at {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                return Snapshot::new();
            }
        };

        match serde_json::from_str::<Snapshot>(&content) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(
                    "Docs snapshot at {} is corrupt, starting empty: {}",
                    self.path.display(),
                    e
                );
                Snapshot::new()
            }
        }
    }

    /// Overwrites the stored snapshot with `snapshot`.
    ///
    /// # Returns
    /// - `Ok(())` - Snapshot written
    /// - `Err(AppError::IoErr)` - File could not be written
    pub async fn save(&self, snapshot: &Snapshot) -> Result<(), AppError> {
        let content = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&self.path, content).await?;

        tracing::debug!(
            "Saved docs snapshot with {} entries to {}",
            snapshot.len(),
            self.path.display()
        );

        Ok(())
    }
}
