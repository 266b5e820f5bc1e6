//! Name-addressed tool dispatch.
//!
//! The dispatcher is the error boundary of the tool layer: whatever a tool
//! does, the caller always receives a well-formed JSON response. There is
//! no shared mutable state between invocations; each call is independent.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::tool::{DispatchError, McpTool};

/// Registry and entry point for named tool invocations.
#[derive(Default)]
pub struct ToolDispatcher {
    tools: HashMap<&'static str, Arc<dyn McpTool>>,
}

impl ToolDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        self.tools.insert(tool.name(), tool);
    }

    /// Names of all registered tools, sorted.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Invoke the named tool with the given parameter object.
    ///
    /// Always returns a response value; unknown names and tool failures
    /// come back as the structured error shape.
    pub async fn dispatch(&self, name: &str, params: &Value) -> Value {
        let Some(tool) = self.tools.get(name) else {
            let err = DispatchError::UnknownTool(name.to_string());
            tracing::warn!(tool = name, "Rejected invocation of unregistered tool");
            return err.to_response();
        };

        match tool.execute(params).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(tool = name, error = %e, "Tool invocation failed");
                e.to_response()
            }
        }
    }
}
