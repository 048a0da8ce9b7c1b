//! Inline token to leaf node conversion.

use crate::error::{Error, Result};
use crate::inline::{InlineToken, TokenKind};
use crate::node::{LeafNode, Node};

/// Map a token to the leaf node that renders it.
///
/// | kind   | tag    | value      | attributes          |
/// |--------|--------|------------|---------------------|
/// | Plain  | none   | text       |                     |
/// | Bold   | `b`    | text       |                     |
/// | Italic | `i`    | text       |                     |
/// | Code   | `code` | text       |                     |
/// | Link   | `a`    | text       | `href`              |
/// | Image  | `img`  | empty      | `src`, `alt` = text |
///
/// Tokens may be built by hand, so the target is checked against the
/// kind: links and images need one, every other kind must not have one.
pub fn token_to_node(token: &InlineToken) -> Result<Node> {
    let target = match (&token.target, token.kind.has_target()) {
        (Some(url), true) => Some(url.as_str()),
        (None, false) => None,
        (None, true) => return Err(Error::MissingTarget { kind: token.kind }),
        (Some(_), false) => return Err(Error::UnexpectedTarget { kind: token.kind }),
    };

    let leaf = match (token.kind, target) {
        (TokenKind::Plain, _) => LeafNode::text(token.text.as_str()),
        (TokenKind::Bold, _) => LeafNode::tagged("b", token.text.as_str()),
        (TokenKind::Italic, _) => LeafNode::tagged("i", token.text.as_str()),
        (TokenKind::Code, _) => LeafNode::tagged("code", token.text.as_str()),
        (TokenKind::Link, Some(url)) => {
            LeafNode::tagged("a", token.text.as_str()).with_attr("href", url)
        }
        (TokenKind::Image, Some(url)) => LeafNode::tagged("img", "")
            .with_attr("src", url)
            .with_attr("alt", token.text.as_str()),
        (kind, None) => return Err(Error::MissingTarget { kind }),
    };

    Ok(leaf.into())
}

/// Convert a token sequence, failing on the first invalid token.
pub fn tokens_to_nodes(tokens: &[InlineToken]) -> Result<Vec<Node>> {
    tokens.iter().map(token_to_node).collect()
}
