//! Documentation change watcher.
//!
//! Periodically compares the documentation published in a GitHub repository against a
//! snapshot persisted on disk and announces new or changed documents.
//!
//! - `source` - Where the listing and revisions come from (`DocsSource`)
//! - `snapshot` - Flat JSON file holding the last-seen revision per document
//! - `watcher` - The reconciliation cycle itself
//! - `sink` - Where change batches are delivered (`DocUpdateSink`)

pub mod sink;
pub mod snapshot;
pub mod source;
pub mod watcher;

pub use sink::{DiscordDocsSink, DocUpdateSink};
pub use snapshot::SnapshotStore;
pub use source::{DocsSource, GithubDocsSource};
pub use watcher::DocsWatcher;

#[cfg(test)]
mod test;
