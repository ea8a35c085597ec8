//! Bounded record of the actions performed in this session.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;

/// Number of actions kept before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub description: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp.format("%H:%M"), self.description)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionHistory {
    entries: VecDeque<HistoryEntry>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    pub fn record(&mut self, description: impl Into<String>) {
        self.record_at(Local::now(), description);
    }

    pub fn record_at(&mut self, timestamp: DateTime<Local>, description: impl Into<String>) {
        self.entries.push_back(HistoryEntry {
            timestamp,
            description: description.into(),
        });
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_history_caps_at_ten_and_keeps_order() {
        let mut history = ActionHistory::new();
        for i in 1..=11 {
            history.record(format!("action {i}"));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let descriptions: Vec<_> = history.iter().map(|e| e.description.as_str()).collect();
        assert!(!descriptions.contains(&"action 1"));
        let expected: Vec<String> = (2..=11).map(|i| format!("action {i}")).collect();
        assert_eq!(descriptions, expected);
    }

    #[test]
    fn test_entry_display_uses_minute_precision() {
        let timestamp = Local.with_ymd_and_hms(2024, 5, 17, 9, 42, 31).unwrap();
        let mut history = ActionHistory::new();
        history.record_at(timestamp, "Repository initialized");

        let entry = history.latest().unwrap();
        assert_eq!(entry.to_string(), "[09:42] Repository initialized");
    }

    #[test]
    fn test_clear_empties_history() {
        let mut history = ActionHistory::new();
        history.record("one");
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
