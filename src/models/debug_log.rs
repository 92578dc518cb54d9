//! Append-only debug transcript
//!
//! Entries are stored in strict chronological order. The transcript is
//! displayed newest first.

use serde::{Deserialize, Serialize};

use super::status::{Severity, StatusMessage};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub severity: Severity,
    pub message: String,
}

impl LogEntry {
    /// One transcript line, e.g. `[14:03:22] success: Preview updated.`
    pub fn line(&self) -> String {
        format!("[{}] {}: {}", self.timestamp, self.severity, self.message)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugLog {
    entries: Vec<LogEntry>,
}

impl DebugLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, timestamp: impl Into<String>, status: &StatusMessage) {
        self.entries.push(LogEntry {
            timestamp: timestamp.into(),
            severity: status.severity,
            message: status.text.clone(),
        });
    }

    /// Entries oldest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest first
    pub fn newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    /// Transcript text as displayed, newest line on top
    pub fn render(&self) -> String {
        self.newest_first()
            .map(LogEntry::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_newest_first() {
        let mut log = DebugLog::new();
        log.append("10:00:00", &StatusMessage::awaiting_input());
        log.append("10:00:01", &StatusMessage::preview_updated());

        let rendered = log.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[10:00:01] success: Preview updated.");
        assert!(lines[1].starts_with("[10:00:00] info:"));
    }

    #[test]
    fn test_entries_stay_chronological() {
        let mut log = DebugLog::new();
        log.append("a", &StatusMessage::awaiting_input());
        log.append("b", &StatusMessage::render_failed("boom"));

        assert_eq!(log.entries()[0].timestamp, "a");
        assert_eq!(log.latest().map(|e| e.timestamp.as_str()), Some("b"));
        assert_eq!(log.latest().map(|e| e.severity), Some(Severity::Error));
    }

    #[test]
    fn test_empty_log_renders_nothing() {
        let log = DebugLog::new();
        assert!(log.is_empty());
        assert_eq!(log.render(), "");
    }
}
