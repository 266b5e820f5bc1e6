//! Paginated console-log retrieval.
//!
//! Parameter extraction is defensive: every parameter has a typed default
//! and ranges are clamped server-side, so a hostile or sloppy caller can
//! never push the log source out of bounds.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use unimcp_core::ConsoleLogSource;

use crate::tool::{DispatchError, McpTool};

/// Offset floor applied regardless of caller input.
const MIN_OFFSET: i64 = 0;

/// Limit bounds applied regardless of caller input.
const MIN_LIMIT: i64 = 1;
const MAX_LIMIT: i64 = 500;

const DEFAULT_LIMIT: i64 = 50;

/// Marker some callers send for "no filter"; treated as absence.
const UNSET: &str = "unset";

/// Retrieves captured console logs as JSON, filtered and paginated.
pub struct GetConsoleLogsTool {
    source: Arc<dyn ConsoleLogSource>,
}

impl GetConsoleLogsTool {
    pub fn new(source: Arc<dyn ConsoleLogSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl McpTool for GetConsoleLogsTool {
    fn name(&self) -> &'static str {
        "get_console_logs"
    }

    async fn execute(&self, params: &Value) -> Result<Value, DispatchError> {
        let log_type = string_param(params, "logType");
        let offset = int_param(params, "offset", 0).max(MIN_OFFSET) as usize;
        let limit = int_param(params, "limit", DEFAULT_LIMIT).clamp(MIN_LIMIT, MAX_LIMIT) as usize;
        let include_stack_trace = bool_param(params, "includeStackTrace", true);

        let payload = self
            .source
            .logs_as_json(log_type.as_deref(), offset, limit, include_stack_trace)
            .await
            .map_err(|e| DispatchError::Execution(e.to_string()))?;

        let mut response = payload
            .as_object()
            .cloned()
            .ok_or_else(|| DispatchError::Execution("log source returned a non-object".into()))?;

        let returned = take_count(&mut response, "returnedCount");
        let filtered = take_count(&mut response, "filteredCount");
        let total = take_count(&mut response, "totalCount");

        let filter_text = log_type
            .as_deref()
            .map_or_else(|| " (all types)".to_string(), |t| format!(" of type '{t}'"));

        response.insert("success".into(), Value::Bool(true));
        response.insert(
            "message".into(),
            json!(format!(
                "Retrieved {returned} of {filtered} log entries{filter_text} \
                 (offset: {offset}, limit: {limit}, includeStackTrace: {include_stack_trace}, \
                 total: {total})"
            )),
        );

        Ok(Value::Object(response))
    }
}

/// String parameter, with the `"unset"` marker and empty strings read as
/// absence.
fn string_param(params: &Value, key: &str) -> Option<String> {
    match params.get(key) {
        Some(Value::String(s)) if !s.is_empty() && s != UNSET => Some(s.clone()),
        _ => None,
    }
}

/// Integer parameter from its native or textual JSON representation.
fn int_param(params: &Value, key: &str, default: i64) -> i64 {
    match params.get(key) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
        Some(Value::String(s)) => s.parse().unwrap_or(default),
        _ => default,
    }
}

/// Boolean parameter from its native or textual JSON representation.
fn bool_param(params: &Value, key: &str, default: bool) -> bool {
    match params.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.parse().unwrap_or(default),
        _ => default,
    }
}

/// Remove a raw count field from the outward payload; the summary message
/// subsumes it.
fn take_count(response: &mut Map<String, Value>, key: &str) -> u64 {
    response
        .remove(key)
        .and_then(|v| v.as_u64())
        .unwrap_or_default()
}
