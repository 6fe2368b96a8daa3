//! The analysis backend seam.
//!
//! A backend handle analyses exactly one in-memory document. It has no notion of resources:
//! locations it returns are plain ranges, and the session/providers attach the document URI.
//! All coordinates are 1-based lines and columns.

use editor_bridge::{AnalysisResult, BackendReply, Range};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure of a full analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The backend could not analyse the submitted text.
    #[error("analysis failed: {0}")]
    Analysis(String),
}

/// A navigation target (definition, type definition, implementation) without a resource.
///
/// Fields other than `range` are carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationTarget {
    /// Target range.
    pub range: Range,
    /// Any other backend-provided fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavigationTarget {
    /// A target with no extra fields.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            extra: Map::new(),
        }
    }
}

/// A reference site reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTarget {
    /// Range of the reference.
    pub range: Range,
}

/// A single text replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Range to replace.
    pub range: Range,
    /// Replacement text.
    pub text: String,
}

impl TextEdit {
    /// Create a text edit.
    pub fn new(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

/// Command attached to a backend code lens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LensCommand {
    /// Host command id.
    pub id: String,
    /// Label shown above the line.
    pub title: String,
    /// Ranges the command refers to (e.g. the references being counted).
    pub positions: Vec<Range>,
}

/// A code lens descriptor as produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLens {
    /// Range the lens is attached to.
    pub range: Range,
    /// The lens command.
    pub command: LensCommand,
}

/// A per-document analysis backend handle.
///
/// Queries return a [`BackendReply`]; "nothing here" is [`BackendReply::NotApplicable`], not an
/// error. Only [`AnalysisBackend::update`] can fail outright.
pub trait AnalysisBackend {
    /// Re-analyse the complete document text.
    fn update(&mut self, text: &str) -> Result<AnalysisResult, BackendError>;

    /// Hover text (markdown) at a position.
    fn hover(&self, line: u32, column: u32) -> BackendReply<String>;

    /// Completion items at a position, in the host's item shape.
    fn completions(&self, line: u32, column: u32) -> BackendReply<Vec<Value>>;

    /// Signature help at a position, in the host's signature help shape.
    fn signature_help(&self, line: u32, column: u32) -> BackendReply<Value>;

    /// Definitions of the symbol at a position.
    fn definition(&self, line: u32, column: u32) -> BackendReply<Vec<NavigationTarget>>;

    /// Type definitions of the symbol at a position.
    fn type_definition(&self, line: u32, column: u32) -> BackendReply<Vec<NavigationTarget>>;

    /// Implementations of the symbol at a position.
    fn implementation(&self, line: u32, column: u32) -> BackendReply<Vec<NavigationTarget>>;

    /// References to the symbol at a position. Declaration filtering is the backend's job.
    fn references(
        &self,
        line: u32,
        column: u32,
        include_declaration: bool,
    ) -> BackendReply<Vec<ReferenceTarget>>;

    /// Edits renaming the symbol at a position.
    fn rename(&self, line: u32, column: u32, new_name: &str) -> BackendReply<Vec<TextEdit>>;

    /// The renamable range at a position.
    fn prepare_rename(&self, line: u32, column: u32) -> BackendReply<Range>;

    /// Document outline, in the host's symbol shape.
    fn document_symbols(&self) -> BackendReply<Vec<Value>>;

    /// Edits to apply after `ch` was typed at a position.
    fn on_type_formatting(&self, line: u32, column: u32, ch: char)
    -> BackendReply<Vec<TextEdit>>;

    /// Folding ranges, in the host's folding range shape.
    fn folding_ranges(&self) -> BackendReply<Vec<Value>>;

    /// Code lenses for the whole document.
    fn code_lenses(&self) -> BackendReply<Vec<CodeLens>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_navigation_target_keeps_extra_fields() {
        let target: NavigationTarget = serde_json::from_value(json!({
            "range": { "startLineNumber": 1, "startColumn": 4, "endLineNumber": 1, "endColumn": 8 },
            "kind": "fn"
        }))
        .unwrap();
        assert_eq!(target.range, Range::on_line(1, 4, 8));
        assert_eq!(target.extra.get("kind"), Some(&json!("fn")));
    }

    #[test]
    fn test_code_lens_parses_backend_payload() {
        let lens: CodeLens = serde_json::from_value(json!({
            "range": { "startLineNumber": 2, "startColumn": 3, "endLineNumber": 2, "endColumn": 9 },
            "command": {
                "id": "editor.action.showReferences",
                "title": "2 references",
                "positions": [
                    { "startLineNumber": 5, "startColumn": 1, "endLineNumber": 5, "endColumn": 4 }
                ]
            }
        }))
        .unwrap();
        assert_eq!(lens.command.title, "2 references");
        assert_eq!(lens.command.positions, vec![Range::on_line(5, 1, 4)]);
    }
}
