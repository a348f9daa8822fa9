//! Append-only journal of narrated events. The journal is the game's
//! canonical history; every engine reports through it.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Info,
    Battle,
    Death,
    Event,
    Intervention,
    Quest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub day: u32,
    pub message: String,
    pub kind: LogKind,
    pub timestamp: i64,
}

impl LogEntry {
    pub fn new(day: u32, message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            day,
            message: message.into(),
            kind,
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// Entries are only ever appended, in the order the engines produced
/// them; within a day that insertion order is the narrative order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    pub entries: Vec<LogEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, entries: Vec<LogEntry>) {
        self.entries.extend(entries);
    }

    pub fn log(&mut self, day: u32, message: impl Into<String>, kind: LogKind) {
        self.push(LogEntry::new(day, message, kind));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries_for_day(&self, day: u32) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_preserves_insertion_order() {
        let mut journal = Journal::new();
        journal.log(1, "first", LogKind::Info);
        journal.log(1, "second", LogKind::Event);
        journal.log(2, "third", LogKind::Battle);

        let messages: Vec<&str> = journal.entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_entries_for_day_filters() {
        let mut journal = Journal::new();
        journal.log(1, "a", LogKind::Info);
        journal.log(2, "b", LogKind::Info);
        journal.log(2, "c", LogKind::Death);

        assert_eq!(journal.entries_for_day(2).count(), 2);
        assert_eq!(journal.entries_for_day(3).count(), 0);
    }
}
