use crate::{context::TestContext, error::TestError};

/// Name of the snapshot file created inside the test's temporary directory.
const SNAPSHOT_FILE_NAME: &str = "docs_cache.json";

/// Builder for creating test contexts with a customizable snapshot file.
///
/// Provides a fluent interface for configuring test environments backed by a fresh
/// temporary directory. Use the builder pattern to seed the snapshot file, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_snapshot(r#"{ "docs/a.md": "2025-06-29T11:00:00Z" }"#)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Raw content written to the snapshot file during `build()`.
    ///
    /// `None` leaves the file absent, which is how a first run on a fresh host looks.
    snapshot: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no snapshot file.
    ///
    /// # Returns
    /// - New `TestBuilder` instance whose context starts without a snapshot file
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    /// Seeds the snapshot file with the provided raw content.
    ///
    /// The content is written verbatim, so tests can seed valid JSON as well as
    /// corrupted data to exercise recovery paths.
    ///
    /// # Arguments
    /// - `content` - Raw file content to write
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_snapshot(mut self, content: impl Into<String>) -> Self {
        self.snapshot = Some(content.into());
        self
    }

    /// Builds the test context.
    ///
    /// Creates the temporary directory and writes the seeded snapshot file if one
    /// was configured.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the temporary directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write the snapshot
    pub async fn build(self) -> Result<TestContext, TestError> {
        let dir = tempfile::tempdir()?;
        let snapshot_path = dir.path().join(SNAPSHOT_FILE_NAME);

        if let Some(content) = self.snapshot {
            std::fs::write(&snapshot_path, content)?;
        }

        Ok(TestContext::new(dir, snapshot_path))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
