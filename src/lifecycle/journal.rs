use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{Direction, Transition};

/// A single handled transition request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// 1-based position in the journal
    pub sequence: u64,
    pub direction: Direction,
    pub transition: Transition,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only record of every request a package handled, no-ops included.
///
/// The journal is unbounded: it grows by one entry per request for the
/// lifetime of its package and is never truncated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitionJournal {
    entries: Vec<JournalEntry>,
}

impl TransitionJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, direction: Direction, transition: Transition) -> &JournalEntry {
        let sequence = self.entries.len() as u64 + 1;
        tracing::debug!(
            sequence = sequence,
            direction = %direction,
            noop = transition.is_noop(),
            "Journal entry recorded"
        );
        self.entries.push(JournalEntry {
            sequence,
            direction,
            transition,
            recorded_at: Utc::now(),
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that changed the package state
    pub fn moves(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.transition.is_noop())
            .count()
    }

    /// Entries that hit a lifecycle boundary
    pub fn noops(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.transition.is_noop())
            .count()
    }

    pub fn last(&self) -> Option<&JournalEntry> {
        self.entries.last()
    }
}
