//! Console-log collaborator port.

use async_trait::async_trait;
use thiserror::Error;

/// Error returned by a console-log source.
#[derive(Debug, Error)]
pub enum LogSourceError {
    /// The capture service cannot serve the request.
    #[error("console log source unavailable: {0}")]
    Unavailable(String),

    /// The request asked for something the source cannot express.
    #[error("invalid log request: {0}")]
    InvalidRequest(String),
}

/// Paginated access to captured console logs.
///
/// Implementations return a JSON object of the shape
/// `{ "logs": [...], "returnedCount": n, "filteredCount": n, "totalCount": n }`
/// where `filteredCount` counts entries matching the type filter and
/// `totalCount` counts everything captured.
#[async_trait]
pub trait ConsoleLogSource: Send + Sync {
    /// Retrieve logs as JSON, filtered by type and paginated.
    ///
    /// Callers pass already-clamped `offset`/`limit` values; sources do not
    /// re-validate them.
    async fn logs_as_json(
        &self,
        log_type: Option<&str>,
        offset: usize,
        limit: usize,
        include_stack_trace: bool,
    ) -> Result<serde_json::Value, LogSourceError>;
}
