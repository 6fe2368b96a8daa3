#![warn(missing_docs)]
//! `editor-bridge` - the data model and highlighting core shared by the bridge crates.
//!
//! # Overview
//!
//! An analysis backend answers semantic queries about exactly one in-memory document. After
//! every edit it re-analyses the full text and returns diagnostics plus a flat list of tagged
//! spans. This crate turns those spans into the per-line token stream an editor's rendering
//! pass consumes.
//!
//! ```text
//! AnalysisResult.highlights ──► HighlightIndex ──► tokenize_line(line) ──► [RenderToken]
//!                                      ▲                  │
//!                                      │                  └── tags::render_style(tag)
//!                         replaced wholesale per update
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use editor_bridge::{HighlightIndex, Range, RenderToken, Token};
//!
//! let index = HighlightIndex::from_tokens(vec![
//!     Token::new(Range::on_line(3, 1, 5), "literal"),
//!     Token::new(Range::on_line(3, 5, 8), "builtin"),
//! ]);
//!
//! assert_eq!(
//!     index.tokenize_line(3),
//!     vec![
//!         RenderToken::new(0, "number"),
//!         RenderToken::new(4, "variable.predefined"),
//!         RenderToken::new(7, "operator"),
//!     ]
//! );
//! assert!(index.tokenize_line(4).is_empty());
//! ```
//!
//! # Module Description
//!
//! - [`position`] - 1-based positions, ranges and document URIs
//! - [`analysis`] - tagged spans and full analysis results
//! - [`diagnostics`] - opaque diagnostic payloads
//! - [`reply`] - tri-state backend query replies
//! - [`tags`] - semantic tag -> render style mapping
//! - [`highlights`] - the highlight cache, indexed by start line
//! - [`tokenizer`] - per-line render tokens and the incremental provider protocol

pub mod analysis;
pub mod diagnostics;
pub mod highlights;
pub mod position;
pub mod reply;
pub mod tags;
pub mod tokenizer;

pub use analysis::{AnalysisResult, SemanticTag, Token};
pub use diagnostics::Diagnostic;
pub use highlights::HighlightIndex;
pub use position::{DocumentUri, Position, Range};
pub use reply::BackendReply;
pub use tags::{STYLE_FILLER, render_style};
pub use tokenizer::{
    LineCursor, LineTokenizer, LineTokens, RenderToken, TokensProvider, render_line,
};
