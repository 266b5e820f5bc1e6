//! In-memory console-log source.
//!
//! Backs the dispatcher in tests and in embeddings that capture logs
//! directly instead of going through the editor's console service.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use unimcp_core::{ConsoleLogSource, LogEntry, LogSourceError};

/// A log source over a plain in-memory buffer of entries.
#[derive(Default)]
pub struct InMemoryLogBuffer {
    entries: Mutex<Vec<LogEntry>>,
}

impl InMemoryLogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one captured entry.
    pub fn push(&self, entry: LogEntry) {
        self.entries.lock().expect("log buffer poisoned").push(entry);
    }

    /// Number of captured entries.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("log buffer poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ConsoleLogSource for InMemoryLogBuffer {
    async fn logs_as_json(
        &self,
        log_type: Option<&str>,
        offset: usize,
        limit: usize,
        include_stack_trace: bool,
    ) -> Result<Value, LogSourceError> {
        let entries = self.entries.lock().expect("log buffer poisoned");
        let total = entries.len();

        let matching: Vec<&LogEntry> = entries
            .iter()
            .filter(|entry| {
                log_type.is_none_or(|wanted| entry.log_type.eq_ignore_ascii_case(wanted))
            })
            .collect();
        let filtered = matching.len();

        let logs: Vec<Value> = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|entry| {
                let mut value = serde_json::to_value(entry)
                    .map_err(|e| LogSourceError::Unavailable(e.to_string()))?;
                if !include_stack_trace {
                    if let Some(object) = value.as_object_mut() {
                        object.remove("stackTrace");
                    }
                }
                Ok(value)
            })
            .collect::<Result<_, LogSourceError>>()?;
        let returned = logs.len();

        Ok(json!({
            "logs": logs,
            "returnedCount": returned,
            "filteredCount": filtered,
            "totalCount": total,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> InMemoryLogBuffer {
        let buffer = InMemoryLogBuffer::new();
        for i in 0..4 {
            buffer.push(LogEntry::new("log", format!("line {i}")));
        }
        buffer.push(LogEntry::new("error", "boom").with_stack_trace("at Update()"));
        buffer
    }

    #[tokio::test]
    async fn test_type_filter_and_counts() {
        let payload = buffer()
            .logs_as_json(Some("error"), 0, 50, true)
            .await
            .unwrap();

        assert_eq!(payload["returnedCount"], 1);
        assert_eq!(payload["filteredCount"], 1);
        assert_eq!(payload["totalCount"], 5);
        assert_eq!(payload["logs"][0]["message"], "boom");
        assert_eq!(payload["logs"][0]["stackTrace"], "at Update()");
    }

    #[tokio::test]
    async fn test_pagination_skips_and_takes() {
        let payload = buffer().logs_as_json(None, 1, 2, true).await.unwrap();

        assert_eq!(payload["returnedCount"], 2);
        assert_eq!(payload["filteredCount"], 5);
        assert_eq!(payload["logs"][0]["message"], "line 1");
        assert_eq!(payload["logs"][1]["message"], "line 2");
    }

    #[tokio::test]
    async fn test_stack_traces_can_be_stripped() {
        let payload = buffer()
            .logs_as_json(Some("error"), 0, 50, false)
            .await
            .unwrap();

        assert!(payload["logs"][0].get("stackTrace").is_none());
    }

    #[tokio::test]
    async fn test_offset_past_end_returns_empty_page() {
        let payload = buffer().logs_as_json(None, 99, 10, true).await.unwrap();

        assert_eq!(payload["returnedCount"], 0);
        assert_eq!(payload["logs"].as_array().unwrap().len(), 0);
        assert_eq!(payload["totalCount"], 5);
    }
}
