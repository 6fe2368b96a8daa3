//! Code lens provider.
//!
//! # Command argument protocol
//!
//! Each lens command is consumed by a command handler outside this crate (typically the host's
//! "show references" action). That handler receives the arguments positionally, so their
//! shape is a wire contract that no type system checks across the boundary:
//!
//! ```text
//! [ documentUri, { lineNumber, column }, [ { uri, range }, ... ] ]
//! ```
//!
//! 1. the URI of the document the lens belongs to,
//! 2. the anchor position: the start of the lens range,
//! 3. one location per range in the backend command's `positions`, stamped with the same URI.
//!
//! The anchor uses the host's position field names, `lineNumber` and `column` (the same names
//! [`Range`] uses for its endpoints), not `line`. Both are 1-based.
//!
//! [`LensArguments`] serializes to exactly this 3-element array. Any change to the layout must
//! bump [`LENS_ARGUMENTS_VERSION`] and be coordinated with the handler.

use super::navigation::Location;
use super::settle;
use crate::backend::{AnalysisBackend, CodeLens};
use crate::session::DocumentSession;
use editor_bridge::{DocumentUri, Position, Range};
use serde::{Deserialize, Serialize};

/// Version of the positional lens argument layout described in the module docs.
pub const LENS_ARGUMENTS_VERSION: u32 = 1;

/// Positional lens command arguments: `(document, anchor, references)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensArguments(pub DocumentUri, pub Position, pub Vec<Location>);

impl LensArguments {
    /// Build the arguments for a backend lens in document `uri`.
    pub fn for_lens(uri: &DocumentUri, lens: &CodeLens) -> Self {
        let anchor = lens.range.start();
        let references = lens
            .command
            .positions
            .iter()
            .map(|range| Location::new(uri.clone(), *range))
            .collect();
        Self(uri.clone(), anchor, references)
    }
}

/// A lens command ready to be invoked by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensInvocation {
    /// Host command id.
    pub id: String,
    /// Label shown above the line.
    pub title: String,
    /// Positional arguments passed to the command handler.
    pub arguments: LensArguments,
}

/// A code lens in host shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostCodeLens {
    /// Range the lens is attached to.
    pub range: Range,
    /// The command run when the lens is clicked.
    pub command: LensInvocation,
}

/// Every lens of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeLensList {
    /// Lenses, in backend order.
    pub lenses: Vec<HostCodeLens>,
}

/// Convert one backend lens for document `uri`.
pub fn host_code_lens(uri: &DocumentUri, lens: CodeLens) -> HostCodeLens {
    let arguments = LensArguments::for_lens(uri, &lens);
    HostCodeLens {
        range: lens.range,
        command: LensInvocation {
            id: lens.command.id,
            title: lens.command.title,
            arguments,
        },
    }
}

/// Every lens of the document, with arguments laid out as described in the module docs.
pub fn provide_code_lenses<B: AnalysisBackend>(
    session: &DocumentSession<B>,
) -> Option<CodeLensList> {
    let lenses = settle(session.code_lenses(), "code_lenses")?;
    Some(CodeLensList {
        lenses: lenses
            .into_iter()
            .map(|lens| host_code_lens(session.uri(), lens))
            .collect(),
    })
}
