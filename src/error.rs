//! Error types for Markdown conversion.

use thiserror::Error;

use crate::inline::TokenKind;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort the conversion of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A leaf node was built without a value.
    #[error("leaf node must have a value")]
    MissingValue,

    /// A parent node has no tag.
    #[error("parent node must have a tag")]
    MissingTag,

    /// A parent node has no children.
    #[error("parent node must have children")]
    MissingChildren,

    /// An inline delimiter appears an odd number of times in one text span.
    #[error("unmatched delimiter {delimiter:?} in: {text:?}")]
    UnmatchedDelimiter {
        /// The delimiter string (`**`, `_` or `` ` ``).
        delimiter: &'static str,
        /// The offending text region.
        text: String,
    },

    /// The document has no content blocks.
    #[error("no content blocks found in markdown")]
    EmptyDocument,

    /// The document has no `# ` heading line.
    #[error("no h1 header found in markdown")]
    NoTitle,

    /// A token kind name outside the supported set.
    #[error("unknown token kind: {0}")]
    UnknownTokenKind(String),

    /// A link or image token without a target URL.
    #[error("{kind} token requires a target url")]
    MissingTarget {
        /// Kind of the offending token.
        kind: TokenKind,
    },

    /// The input is too long for `u32` byte offsets.
    #[error("input of {len} bytes exceeds the {max} byte limit")]
    InputTooLarge {
        /// Input length in bytes.
        len: usize,
        /// Longest accepted input.
        max: usize,
    },

    /// A non-link token carrying a target URL.
    #[error("{kind} token must not carry a target url")]
    UnexpectedTarget {
        /// Kind of the offending token.
        kind: TokenKind,
    },
}
