//! The canonical server-registration fragment.
//!
//! Paths are canonical before they are composed into the document (see
//! `ServerInstallation`); the serialized text is never post-processed, so
//! values that legitimately contain repeated slashes survive untouched.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value, json};

use unimcp_core::{SERVER_COMMAND, SERVER_NAME, ServerInstallation};

/// Textual indentation of rendered JSON. Affects formatting only, never
/// the document's logical content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndentStyle {
    /// One tab per level.
    Tabs,
    /// Two spaces per level.
    #[default]
    Spaces,
}

impl IndentStyle {
    const fn indent(self) -> &'static [u8] {
        match self {
            Self::Tabs => b"\t",
            Self::Spaces => b"  ",
        }
    }
}

/// The registration object merged into every client's configuration:
/// `{ "mcpServers": { "mcp-unity": { "command": ..., "args": [...] } } }`.
#[derive(Debug, Clone)]
pub struct ServerFragment {
    document: Value,
}

impl ServerFragment {
    /// Build the fragment for a resolved installation.
    pub fn new(installation: &ServerInstallation) -> Self {
        let document = json!({
            "mcpServers": {
                SERVER_NAME: {
                    "command": SERVER_COMMAND,
                    "args": [installation.entry_point()],
                }
            }
        });
        Self { document }
    }

    /// The full fragment document.
    pub const fn document(&self) -> &Value {
        &self.document
    }

    /// The per-server entry (`command` + `args`), the only value the merger
    /// ever writes into a client document.
    pub fn server_entry(&self) -> &Value {
        &self.document["mcpServers"][SERVER_NAME]
    }

    /// Render the fragment with the requested indentation.
    pub fn render(&self, indent: IndentStyle) -> serde_json::Result<String> {
        render_value(&self.document, indent)
    }
}

/// Render any JSON value with the requested indentation.
pub fn render_value(value: &Value, indent: IndentStyle) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.indent());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
