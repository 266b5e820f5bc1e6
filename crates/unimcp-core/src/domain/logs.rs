//! Console log entries served by the log-source collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One captured console log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Log category ("error", "warning", "log", ...).
    #[serde(rename = "type")]
    pub log_type: String,

    /// The logged message text.
    pub message: String,

    /// Stack trace captured with the entry, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,

    /// When the entry was captured.
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    pub fn new(log_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            log_type: log_type.into(),
            message: message.into(),
            stack_trace: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach a stack trace.
    #[must_use]
    pub fn with_stack_trace(mut self, trace: impl Into<String>) -> Self {
        self.stack_trace = Some(trace.into());
        self
    }
}
