//! Documentation watcher domain models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Last-known revision per tracked document, keyed by document path.
///
/// A sorted map so the same snapshot always serializes to the same bytes.
pub type Snapshot = BTreeMap<String, String>;

/// Entry of the remote documentation listing.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Debug)]
pub struct RemoteEntry {
    /// File name, used to decide whether the entry is tracked
    pub name: String,
    /// Path within the repository, used as the document identifier
    pub path: String,
}

/// A tracked document whose revision differs from the snapshot.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Debug)]
pub struct DocChange {
    pub file: String,
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
}

/// Result of a single reconciliation cycle.
#[derive(PartialEq, Eq, Debug)]
pub enum WatchOutcome {
    /// A previous cycle was still running so this one did nothing.
    Skipped,
    /// The cycle ran to completion; the batch is empty when nothing changed.
    Completed(Vec<DocChange>),
}

impl WatchOutcome {
    /// Returns the changes found by a completed cycle, or an empty slice.
    pub fn changes(&self) -> &[DocChange] {
        match self {
            Self::Skipped => &[],
            Self::Completed(changes) => changes,
        }
    }
}
