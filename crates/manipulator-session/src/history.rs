//! The execution history log.
//!
//! Every executed command string leaves a derived audit record: when it
//! ran, what was entered, what the optimizer produced, and the sample
//! layout before and after. Entries are kept newest-first. The log is
//! plain serde data; how (and whether) a host persists it is the host's
//! business.

use std::collections::VecDeque;

use chrono::Utc;
use manipulator_types::{HistoryEntry, HistoryEntryId, Sample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A newest-first log of executed command strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    /// Oldest entries are dropped past this bound; `None` means unbounded.
    max_entries: Option<usize>,
}

impl HistoryLog {
    /// Create an empty, unbounded log.
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: None,
        }
    }

    /// Create an empty log that keeps at most `max_entries` records,
    /// dropping the oldest past the bound.
    pub const fn bounded(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Some(max_entries),
        }
    }

    /// Record one executed command string. Returns the new entry's id.
    pub fn record(
        &mut self,
        raw_command: &str,
        optimized_command: &str,
        samples_before: Vec<Sample>,
        samples_after: Vec<Sample>,
    ) -> HistoryEntryId {
        let id = HistoryEntryId::new();
        self.entries.push_front(HistoryEntry {
            id,
            created_at: Utc::now(),
            raw_command: raw_command.to_string(),
            optimized_command: optimized_command.to_string(),
            samples_before,
            samples_after,
        });
        if let Some(bound) = self.max_entries {
            self.entries.truncate(bound);
        }
        debug!(%id, total = self.entries.len(), "history entry recorded");
        id
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recently recorded entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }
}
