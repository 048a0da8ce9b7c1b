//! Block-level parser for Markdown.
//!
//! The block parser is line-oriented and handles:
//! - Fenced code blocks
//! - ATX headings
//! - Blockquotes
//! - Unordered and ordered lists
//! - Paragraphs
//!
//! Blocks never nest: a document is a flat sequence of blank-line
//! separated units, each classified on its own.

mod classify;
mod kind;
mod markers;
mod segment;

pub use classify::classify;
pub use kind::BlockKind;
pub use markers::{list_items, strip_code_fence, strip_heading, strip_quote_markers};
pub use segment::{normalize_line_endings, segment};
pub(crate) use segment::trim_space;
