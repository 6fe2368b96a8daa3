//! Coordinates shared by the analysis backend and the editor host.
//!
//! Both sides count lines and columns from 1, in the same text-unit granularity. The only
//! conversion performed by this crate is column -> 0-based start offset when emitting
//! [`crate::RenderToken`]s.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Line number (1-based).
    pub line_number: u32,
    /// Column (1-based).
    pub column: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(line_number: u32, column: u32) -> Self {
        Self {
            line_number,
            column,
        }
    }
}

/// A text range with 1-based lines and columns. The end column is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// First line of the range.
    #[serde(rename = "startLineNumber")]
    pub start_line: u32,
    /// First column of the range.
    #[serde(rename = "startColumn")]
    pub start_column: u32,
    /// Last line of the range.
    #[serde(rename = "endLineNumber")]
    pub end_line: u32,
    /// Column one past the last character of the range.
    #[serde(rename = "endColumn")]
    pub end_column: u32,
}

impl Range {
    /// Create a new range.
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A range on a single line spanning `start_column..end_column`.
    pub fn on_line(line: u32, start_column: u32, end_column: u32) -> Self {
        Self::new(line, start_column, line, end_column)
    }

    /// The start of the range as a [`Position`].
    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_column)
    }

    /// The end of the range as a [`Position`].
    pub fn end(&self) -> Position {
        Position::new(self.end_line, self.end_column)
    }
}

/// Resource identity of a document, as assigned by the editor host.
///
/// The backend has no notion of resources; this value is attached to every location the
/// bridge hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentUri(String);

impl DocumentUri {
    /// Wrap a host-provided URI string.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentUri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DocumentUri {
    fn from(value: String) -> Self {
        Self(value)
    }
}
