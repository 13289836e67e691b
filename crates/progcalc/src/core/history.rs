//! Bounded calculation history, newest first

use std::collections::VecDeque;

use crate::core::number::format_number;

/// A single completed evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The expression as typed (with `×`/`÷`)
    pub expression: String,
    /// The numeric result
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self { expression, result }
    }

    /// `"<expression> = <result>"`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_number(self.result))
    }
}

/// Calculation history
///
/// New entries go to the front; once full, the oldest entry falls off the
/// back. There is deliberately no way to clear it.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 10;

    /// Creates an empty history holding up to ten entries
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with a custom bound
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Adds an entry at the front, evicting the oldest if full
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.max_entries);
    }

    /// Records an evaluation
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(HistoryEntry::new(expression.to_string(), result));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display lines, newest first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::display).collect()
    }
}
