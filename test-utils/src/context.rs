use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing the temporary directory and snapshot file location.
///
/// The directory is removed when the context is dropped, so keep the context alive for
/// the duration of the test.
pub struct TestContext {
    /// Temporary directory owning every file created by the test.
    dir: TempDir,

    /// Location of the documentation snapshot file inside `dir`.
    snapshot_path: PathBuf,
}

impl TestContext {
    pub(crate) fn new(dir: TempDir, snapshot_path: PathBuf) -> Self {
        Self { dir, snapshot_path }
    }

    /// Returns the path of the snapshot file, which may or may not exist yet.
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Returns the temporary directory root.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Returns whether the snapshot file currently exists.
    pub fn snapshot_exists(&self) -> bool {
        self.snapshot_path.exists()
    }

    /// Reads the snapshot file back as a string.
    ///
    /// # Returns
    /// - `Ok(String)` - Raw file content
    /// - `Err(TestError::Io)` - File does not exist or could not be read
    pub fn read_snapshot(&self) -> Result<String, TestError> {
        Ok(std::fs::read_to_string(&self.snapshot_path)?)
    }
}
