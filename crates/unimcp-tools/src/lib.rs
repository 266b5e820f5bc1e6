//! Tool dispatch layer for the Unity MCP bridge.
//!
//! A remote caller invokes named operations with JSON parameters and gets
//! JSON results back. Every response carries a `success` boolean; failures
//! carry a machine-readable `errorCode` and a human-readable `errorMessage`
//! instead of a partial payload. Nothing in this crate lets an error escape
//! to the transport.

pub mod buffer;
pub mod console_logs;
pub mod dispatcher;
pub mod tool;

pub use buffer::InMemoryLogBuffer;
pub use console_logs::GetConsoleLogsTool;
pub use dispatcher::ToolDispatcher;
pub use tool::{DispatchError, McpTool};
