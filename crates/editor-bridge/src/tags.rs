//! Semantic tag -> render style mapping.
//!
//! Style identifiers are theme scopes understood by the host (e.g. `"variable.predefined"`).
//! Tags without a dedicated entry are used as their own style.

use crate::analysis::SemanticTag;

/// Style for built-in names (primitive types, intrinsic functions).
pub const STYLE_BUILTIN: &str = "variable.predefined";
/// Style for attributes.
pub const STYLE_ATTRIBUTE: &str = "key";
/// Style for macro invocations.
pub const STYLE_MACRO: &str = "number.hex";
/// Style for literals.
pub const STYLE_LITERAL: &str = "number";
/// Style of the filler tokens that terminate a highlighted span.
pub const STYLE_FILLER: &str = "operator";

/// Map a semantic tag name to the host style identifier. Total: unknown tags pass through.
pub fn render_style(tag: &str) -> &str {
    match tag {
        "builtin" => STYLE_BUILTIN,
        "attribute" => STYLE_ATTRIBUTE,
        "macro" => STYLE_MACRO,
        "literal" => STYLE_LITERAL,
        other => other,
    }
}

impl SemanticTag {
    /// The host style identifier for this tag.
    pub fn render_style(&self) -> &str {
        render_style(self.as_str())
    }
}
