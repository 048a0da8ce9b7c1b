//! Delimiter splitting for bold, italic and code spans.
//!
//! Each pass splits every plain token on paired occurrences of one
//! delimiter string. Text between the first and second occurrence (third
//! and fourth, ...) takes the delimiter's kind and is never split again.

use memchr::memmem::Finder;
use smallvec::SmallVec;

use super::token::{InlineToken, TokenKind};
use crate::error::{Error, Result};

/// A delimiter string and the kind of span it encloses.
#[derive(Debug, Clone, Copy)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: TokenKind,
}

/// `**bold**`
pub const BOLD: Delimiter = Delimiter {
    marker: "**",
    kind: TokenKind::Bold,
};

/// `_italic_`
pub const ITALIC: Delimiter = Delimiter {
    marker: "_",
    kind: TokenKind::Italic,
};

/// `` `code` ``
pub const CODE: Delimiter = Delimiter {
    marker: "`",
    kind: TokenKind::Code,
};

/// Passes in the order they run. Bold goes first so `**` is never read
/// as two italic markers.
pub const PASSES: [Delimiter; 3] = [BOLD, ITALIC, CODE];

/// Run one delimiter pass over a token sequence.
///
/// Non-plain tokens pass through unchanged. Empty segments (e.g. the
/// text before a leading delimiter) are dropped.
pub fn split_delimiter(tokens: Vec<InlineToken>, delimiter: Delimiter) -> Result<Vec<InlineToken>> {
    let finder = Finder::new(delimiter.marker);
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }
        split_plain(&token.text, delimiter, &finder, &mut out)?;
    }

    Ok(out)
}

fn split_plain(
    text: &str,
    delimiter: Delimiter,
    finder: &Finder<'_>,
    out: &mut Vec<InlineToken>,
) -> Result<()> {
    let positions: SmallVec<[usize; 8]> = finder.find_iter(text.as_bytes()).collect();
    if positions.len() % 2 == 1 {
        return Err(Error::UnmatchedDelimiter {
            delimiter: delimiter.marker,
            text: text.to_string(),
        });
    }

    let marker_len = delimiter.marker.len();
    let mut start = 0;
    let mut inside = false;

    for end in positions.iter().copied().chain(std::iter::once(text.len())) {
        // Markers are ASCII, so every position is a char boundary.
        let segment = &text[start..end];
        if !segment.is_empty() {
            out.push(if inside {
                InlineToken::new(segment, delimiter.kind)
            } else {
                InlineToken::plain(segment)
            });
        }
        start = end + marker_len;
        inside = !inside;
    }

    Ok(())
}
