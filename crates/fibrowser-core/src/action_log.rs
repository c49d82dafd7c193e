//! Action log shown in the developer console

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;

/// Status line text before anything is logged
pub const INITIAL_STATUS: &str = "Ready";

#[derive(Debug, Clone, Serialize)]
pub struct ActionLogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl ActionLogEntry {
    /// Console line, `[HH:MM:SS] message`
    pub fn console_line(&self) -> String {
        format!("[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

/// Append-only log, mirrored to the single-line status text.
///
/// Without a capacity the log grows for the lifetime of the window.
#[derive(Debug)]
pub struct ActionLog {
    entries: VecDeque<ActionLogEntry>,
    capacity: Option<usize>,
    status: String,
}

impl ActionLog {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            status: INITIAL_STATUS.to_string(),
        }
    }

    pub fn record(&mut self, message: impl Into<String>) {
        let entry = ActionLogEntry {
            timestamp: Local::now(),
            message: message.into(),
        };

        tracing::debug!(action = %entry.message, "Window action");

        self.status.clone_from(&entry.message);
        self.entries.push_back(entry);

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                self.entries.pop_front();
            }
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter()
    }

    /// Newest entry; the console keeps it scrolled into view
    pub fn last(&self) -> Option<&ActionLogEntry> {
        self.entries.back()
    }

    pub fn console_lines(&self) -> Vec<String> {
        self.entries.iter().map(ActionLogEntry::console_line).collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
