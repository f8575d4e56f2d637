//! Calculation history tracking.
//!
//! Keeps a bounded, newest-first log of completed calculations so the UI
//! can list them and load a previous result back into the calculator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::vec_deque;
use std::collections::VecDeque;

/// Default number of entries kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Record of a single completed calculation.
///
/// # Example
///
/// ```rust
/// use tally::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("5 + 3", "8");
/// assert_eq!(entry.expression, "5 + 3");
/// assert_eq!(entry.result, "8");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The calculation as shown to the user, e.g. `5 + 3` or `sin(30)`
    pub expression: String,
    /// The rounded result text
    pub result: String,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded history of calculations, newest first.
///
/// Inserting past the capacity drops the oldest entry.
///
/// # Example
///
/// ```rust
/// use tally::core::HistoryLog;
///
/// let mut history = HistoryLog::with_capacity(2);
/// history.record("1 + 1", "2");
/// history.record("2 + 2", "4");
/// history.record("3 + 3", "6");
///
/// let results: Vec<&str> = history.entries().map(|e| e.result.as_str()).collect();
/// assert_eq!(results, vec!["6", "4"]);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create an empty log holding up to [`DEFAULT_HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty log with a custom capacity (at least one entry).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a calculation at the front, evicting the oldest entry if full.
    pub fn record(&mut self, expression: impl Into<String>, result: impl Into<String>) {
        self.push(HistoryEntry::new(expression, result));
    }

    /// Insert an existing entry at the front.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in display order, newest first.
    pub fn entries(&self) -> vec_deque::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Entry at `index`, where 0 is the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
