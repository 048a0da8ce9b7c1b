//! Inline tokenizer for Markdown.
//!
//! Two stages, each a sequence of passes over a token list:
//! 1. Delimiter splitting: bold (`**`), then italic (`_`), then code (`` ` ``)
//! 2. Link extraction: images, then links
//!
//! Every pass only splits plain tokens; a token of any other kind is final.

pub mod delimiter;
pub mod links;
mod token;

pub use token::{InlineToken, TokenKind};

use crate::error::Result;
use crate::limits::check_input_len;
use delimiter::{split_delimiter, PASSES};
use links::{split_images, split_links};

/// Tokenize one span of inline text, in document order.
///
/// Fails with [`crate::Error::UnmatchedDelimiter`] when a plain span holds
/// an odd number of occurrences of a delimiter, and with
/// [`crate::Error::InputTooLarge`] past [`crate::limits::MAX_INPUT_LEN`].
///
/// # Example
/// ```
/// use mdpages::inline::{tokenize, InlineToken, TokenKind};
///
/// let tokens = tokenize("This is **text** with `code`").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         InlineToken::plain("This is "),
///         InlineToken::new("text", TokenKind::Bold),
///         InlineToken::plain(" with "),
///         InlineToken::new("code", TokenKind::Code),
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Result<Vec<InlineToken>> {
    check_input_len(text.len())?;
    let mut tokens = vec![InlineToken::plain(text)];
    for delimiter in PASSES {
        tokens = split_delimiter(tokens, delimiter)?;
    }
    // Images first, so link extraction never sees `![..](..)` syntax.
    let tokens = split_images(tokens);
    Ok(split_links(tokens))
}
