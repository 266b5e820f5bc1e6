//! The uniform named-operation contract.

use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

/// Failure of one dispatched invocation.
///
/// These never cross the transport as errors; the dispatcher renders them
/// into the structured `success: false` response shape.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No tool registered under the requested name.
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    /// The tool ran and failed.
    #[error("{0}")]
    Execution(String),
}

impl DispatchError {
    /// Stable tag carried in the response's `errorCode` field.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::Execution(_) => "tool_execution_error",
        }
    }

    /// Render the structured error response for this failure.
    pub fn to_response(&self) -> Value {
        json!({
            "success": false,
            "errorCode": self.code(),
            "errorMessage": self.to_string(),
        })
    }
}

/// A named operation invocable with JSON parameters.
///
/// Implementations read each parameter defensively (typed default on
/// missing or unparsable values) and return a payload that already carries
/// `success: true`; failure is expressed through `DispatchError`, which the
/// dispatcher turns into the error response shape.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Name the tool is dispatched under.
    fn name(&self) -> &'static str;

    /// Run the operation against the given parameter object.
    async fn execute(&self, params: &Value) -> Result<Value, DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = DispatchError::Execution("log source down".into()).to_response();

        assert_eq!(response["success"], false);
        assert_eq!(response["errorCode"], "tool_execution_error");
        assert_eq!(response["errorMessage"], "log source down");
    }

    #[test]
    fn test_unknown_tool_code() {
        let err = DispatchError::UnknownTool("get_scene".into());
        assert_eq!(err.code(), "unknown_tool");
        assert_eq!(err.to_string(), "unknown tool 'get_scene'");
    }
}
