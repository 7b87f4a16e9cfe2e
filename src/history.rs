// File: src/history.rs
use crate::core::types::Scheme;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 5;
pub const DEFAULT_DISPLAY_LIMIT: usize = 30;
const ELLIPSIS: &str = "...";

/// One line of the recent-results strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentResultsEntry {
    #[serde(rename = "text")]
    pub display_text: String,
    #[serde(rename = "lang")]
    pub scheme: Scheme,
    #[serde(rename = "val")]
    pub primary_value: u64,
}

/// A caller-owned, most-recent-first list of calculations with a fixed
/// capacity. Each session keeps its own instance.
#[derive(Debug, Clone)]
pub struct RecentResultsLog {
    capacity: usize,
    display_limit: usize,
    entries: VecDeque<RecentResultsEntry>,
}

impl Default for RecentResultsLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_DISPLAY_LIMIT)
    }
}

impl RecentResultsLog {
    pub fn new(capacity: usize, display_limit: usize) -> Self {
        Self {
            capacity,
            display_limit,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Records a calculation at the front and drops anything past capacity.
    /// Blank input (after trimming) is not recorded; returns whether an
    /// entry was added.
    pub fn record(&mut self, raw_text: &str, scheme: Scheme, primary_value: u64) -> bool {
        if raw_text.trim().is_empty() {
            return false;
        }
        self.entries.push_front(RecentResultsEntry {
            display_text: self.truncate(raw_text),
            scheme,
            primary_value,
        });
        if self.entries.len() > self.capacity {
            self.entries.truncate(self.capacity);
            debug!(capacity = self.capacity, "recent results trimmed");
        }
        true
    }

    fn truncate(&self, raw_text: &str) -> String {
        match raw_text.char_indices().nth(self.display_limit) {
            Some((cut, _)) => format!("{}{}", &raw_text[..cut], ELLIPSIS),
            None => raw_text.to_string(),
        }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &RecentResultsEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<RecentResultsEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&RecentResultsEntry> {
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

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
