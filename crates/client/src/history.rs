use std::collections::VecDeque;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use text_hasher_core::HashResponse;

pub const PREVIEW_CHARS: usize = 50;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub original_text: String,
    pub hash: String,
    pub preview: String,
}

impl HistoryEntry {
    pub fn new(resp: &HashResponse, at: NaiveDateTime) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            original_text: resp.original_text.clone(),
            hash: resp.hashed_value.clone(),
            preview: preview(&resp.original_text),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.preview.to_lowercase().contains(needle)
            || self.hash.to_lowercase().contains(needle)
            || self.timestamp.to_lowercase().contains(needle)
    }
}

/// First `PREVIEW_CHARS` characters on a single line.
fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

/// In-memory results, most recent first. Owned by whoever presents them.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, resp: &HashResponse, at: NaiveDateTime) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry::new(resp, at));
        &self.entries[0]
    }

    pub fn record_now(&mut self, resp: &HashResponse) -> &HistoryEntry {
        self.record(resp, Local::now().naive_local())
    }

    /// Case-insensitive substring match on preview, hash or timestamp. An
    /// empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&HistoryEntry> {
        let needle = query.to_lowercase();
        self.entries.iter().filter(|e| e.matches(&needle)).collect()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
