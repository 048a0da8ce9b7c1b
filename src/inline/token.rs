//! Inline token types.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain text, rendered verbatim.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl TokenKind {
    /// Every supported kind.
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Plain,
        TokenKind::Bold,
        TokenKind::Italic,
        TokenKind::Code,
        TokenKind::Link,
        TokenKind::Image,
    ];

    /// Lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }

    /// Whether tokens of this kind carry a target URL.
    pub fn has_target(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownTokenKind(s.to_string()))
    }
}

/// A classified fragment of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineToken {
    pub text: String,
    pub kind: TokenKind,
    /// URL for links and images; `None` for every other kind.
    pub target: Option<String>,
}

impl InlineToken {
    /// Token of a kind without a target.
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
            target: None,
        }
    }

    /// Plain text token.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Plain)
    }

    /// Link token.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Link,
            target: Some(url.into()),
        }
    }

    /// Image token; `alt` is the token text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: TokenKind::Image,
            target: Some(url.into()),
        }
    }

    /// Check if this token is still open to further splitting.
    #[inline]
    pub fn is_plain(&self) -> bool {
        self.kind == TokenKind::Plain
    }
}
