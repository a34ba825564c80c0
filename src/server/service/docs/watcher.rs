//! Documentation change reconciliation.

use tokio::sync::Mutex;

use super::{sink::DocUpdateSink, snapshot::SnapshotStore, source::DocsSource};
use crate::server::{
    error::AppError,
    model::docs::{DocChange, WatchOutcome},
};

/// Compares the remote documentation against the persisted snapshot and announces
/// whatever changed.
pub struct DocsWatcher<S> {
    pub(super) source: S,
    store: SnapshotStore,
    /// Only entries whose name ends with this suffix are tracked.
    extension: String,
    /// Held for the duration of a cycle so overlapping ticks never share the snapshot.
    running: Mutex<()>,
}

impl<S: DocsSource> DocsWatcher<S> {
    pub fn new(source: S, store: SnapshotStore, extension: impl Into<String>) -> Self {
        Self {
            source,
            store,
            extension: extension.into(),
            running: Mutex::new(()),
        }
    }

    /// Runs one reconciliation cycle.
    ///
    /// Loads the snapshot, fetches the remote listing and the latest revision of every
    /// tracked document in listing order, and collects documents whose revision differs
    /// from the snapshot. Documents without any revision are skipped and never stored.
    /// When at least one document changed, the full snapshot is written first and then
    /// `sink` is invoked exactly once with the whole batch.
    ///
    /// Delivery is at-most-once: the snapshot is persisted before the sink runs, so if
    /// the sink fails the same batch is not reported again on the next cycle.
    ///
    /// # Arguments
    /// - `sink` - Receives the batch of changes when it is non-empty
    ///
    /// # Returns
    /// - `Ok(WatchOutcome::Completed(changes))` - Cycle finished; `changes` may be empty
    /// - `Ok(WatchOutcome::Skipped)` - Another cycle was still running
    /// - `Err(AppError)` - A remote request, the snapshot write or the sink failed. A
    ///   failure before the write leaves the stored snapshot untouched and sends nothing
    pub async fn reconcile<K>(&self, sink: &K) -> Result<WatchOutcome, AppError>
    where
        K: DocUpdateSink + ?Sized,
    {
        let Ok(_running) = self.running.try_lock() else {
            tracing::warn!("Previous docs check is still running, skipping this tick");
            return Ok(WatchOutcome::Skipped);
        };

        let mut snapshot = self.store.load().await;
        let entries = self.source.list_documents().await?;

        let mut changes: Vec<DocChange> = Vec::new();

        for entry in entries
            .into_iter()
            .filter(|entry| entry.name.ends_with(&self.extension))
        {
            let Some(revision) = self.source.latest_revision(&entry.path).await? else {
                tracing::debug!("No history for {}, skipping", entry.path);
                continue;
            };

            if snapshot.get(&entry.path) == Some(&revision) {
                continue;
            }

            snapshot.insert(entry.path.clone(), revision.clone());
            changes.push(DocChange {
                file: entry.path,
                last_update: revision,
            });
        }

        if changes.is_empty() {
            tracing::debug!("No documentation changes found");
            return Ok(WatchOutcome::Completed(changes));
        }

        self.store.save(&snapshot).await?;

        tracing::info!("Found {} documentation change(s)", changes.len());

        sink.send_updates(&changes).await?;

        Ok(WatchOutcome::Completed(changes))
    }
}
