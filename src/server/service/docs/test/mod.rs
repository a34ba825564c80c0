use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use test_utils::{builder::TestBuilder, fixture::docs};

use super::{DocUpdateSink, DocsSource, DocsWatcher, SnapshotStore};
use crate::server::{
    error::AppError,
    model::docs::{DocChange, RemoteEntry, Snapshot, WatchOutcome},
};


/// In-memory `DocsSource` seeded from the docs fixture.
struct FakeSource {
    entries: Vec<RemoteEntry>,
    revisions: HashMap<String, String>,
    fail_listing: bool,
    fail_revision_for: Option<String>,
    revision_requests: Mutex<Vec<String>>,
}

impl FakeSource {
    fn from_fixture() -> Self {
        Self {
            entries: docs::LISTING
                .iter()
                .map(|(name, path)| RemoteEntry {
                    name: name.to_string(),
                    path: path.to_string(),
                })
                .collect(),
            revisions: docs::REVISIONS
                .iter()
                .map(|(path, date)| (path.to_string(), date.to_string()))
                .collect(),
            fail_listing: false,
            fail_revision_for: None,
            revision_requests: Mutex::new(Vec::new()),
        }
    }

    fn with_revision(mut self, path: &str, revision: &str) -> Self {
        self.revisions
            .insert(path.to_string(), revision.to_string());
        self
    }

    fn without_history(mut self, path: &str) -> Self {
        self.revisions.remove(path);
        self
    }

    fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    fn failing_revision_for(mut self, path: &str) -> Self {
        self.fail_revision_for = Some(path.to_string());
        self
    }

    fn revision_requests(&self) -> Vec<String> {
        self.revision_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocsSource for FakeSource {
    async fn list_documents(&self) -> Result<Vec<RemoteEntry>, AppError> {
        if self.fail_listing {
            return Err(AppError::InternalError("listing unavailable".to_string()));
        }
        Ok(self.entries.clone())
    }

    async fn latest_revision(&self, path: &str) -> Result<Option<String>, AppError> {
        self.revision_requests
            .lock()
            .unwrap()
            .push(path.to_string());

        if self.fail_revision_for.as_deref() == Some(path) {
            return Err(AppError::InternalError(format!("commits for {} unavailable", path)));
        }
        Ok(self.revisions.get(path).cloned())
    }
}

/// `DocUpdateSink` that records every batch it receives.
#[derive(Default)]
struct RecordingSink {
    batches: Mutex<Vec<Vec<DocChange>>>,
    fail: bool,
}

impl RecordingSink {
    fn failing() -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn batches(&self) -> Vec<Vec<DocChange>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocUpdateSink for RecordingSink {
    async fn send_updates(&self, changes: &[DocChange]) -> Result<(), AppError> {
        self.batches.lock().unwrap().push(changes.to_vec());
        if self.fail {
            return Err(AppError::InternalError("channel unavailable".to_string()));
        }
        Ok(())
    }
}

fn change(file: &str, last_update: &str) -> DocChange {
    DocChange {
        file: file.to_string(),
        last_update: last_update.to_string(),
    }
}

/// The batch the fixture produces against an empty snapshot.
fn fixture_batch() -> Vec<DocChange> {
    vec![
        change("docs/file1.md", "2025-06-30T12:00:00Z"),
        change("docs/file2.md", "2025-06-29T10:00:00Z"),
    ]
}

/// Snapshot file content after the fixture batch is persisted.
const FIXTURE_SNAPSHOT: &str = r#"{
  "docs/file1.md": "2025-06-30T12:00:00Z",
  "docs/file2.md": "2025-06-29T10:00:00Z"
}"#;
