//! Link and image extraction.
//!
//! Handles:
//! - Images: `![alt](url)`
//! - Inline links: `[text](url)` where `[` is not preceded by `!`
//!
//! Label and URL are the shortest runs up to the first `](` and the first
//! `)` respectively, and neither may span a line break.

use super::token::InlineToken;
use crate::cursor::Cursor;
use crate::Range;

/// A matched link or image inside one token's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch {
    /// Whole match, including `!` for images and the closing `)`.
    pub span: Range,
    /// Link text or image alt text.
    pub label: Range,
    /// Destination URL.
    pub url: Range,
}

/// Find the first link (or image) at or after `from`.
pub fn find_link(text: &str, from: usize, is_image: bool) -> Option<LinkMatch> {
    let bytes = text.as_bytes();
    let mut cursor = Cursor::new_at(bytes, from);

    loop {
        let open = cursor.offset() + cursor.find(b'[')?;
        cursor.seek(open);
        let bang = cursor.peek_back() == Some(b'!');
        // An image's `!` must itself lie inside the scanned region.
        let start = match is_image {
            true if bang && open > from => open - 1,
            false if !bang => open,
            _ => {
                cursor.bump();
                continue;
            }
        };

        cursor.bump();
        let label_start = cursor.offset();
        // No `](` anywhere further means no later candidate can match either.
        let label_end = label_start + cursor.find_bytes(b"](")?;
        if has_newline(&bytes[label_start..label_end]) {
            continue;
        }

        let url_start = label_end + 2;
        let url_end = url_start + Cursor::new_at(bytes, url_start).find(b')')?;
        if has_newline(&bytes[url_start..url_end]) {
            continue;
        }

        return Some(LinkMatch {
            span: Range::from_usize(start, url_end + 1),
            label: Range::from_usize(label_start, label_end),
            url: Range::from_usize(url_start, url_end),
        });
    }
}

/// All non-overlapping matches, left to right.
pub fn find_links(text: &str, is_image: bool) -> Vec<LinkMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;
    while let Some(found) = find_link(text, pos, is_image) {
        pos = found.span.end as usize;
        matches.push(found);
    }
    matches
}

/// Split `![alt](url)` out of every plain token.
pub fn split_images(tokens: Vec<InlineToken>) -> Vec<InlineToken> {
    split_links_by(tokens, true)
}

/// Split `[text](url)` out of every plain token.
pub fn split_links(tokens: Vec<InlineToken>) -> Vec<InlineToken> {
    split_links_by(tokens, false)
}

fn split_links_by(tokens: Vec<InlineToken>, is_image: bool) -> Vec<InlineToken> {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let matches = find_links(&token.text, is_image);
        if matches.is_empty() {
            out.push(token);
            continue;
        }

        let text = token.text.as_str();
        let mut pos = 0;
        for found in matches {
            let start = found.span.start as usize;
            if start > pos {
                out.push(InlineToken::plain(&text[pos..start]));
            }
            let label = found.label.slice_str(text);
            let url = found.url.slice_str(text);
            out.push(if is_image {
                InlineToken::image(label, url)
            } else {
                InlineToken::link(label, url)
            });
            pos = found.span.end as usize;
        }
        if pos < text.len() {
            out.push(InlineToken::plain(&text[pos..]));
        }
    }

    out
}

#[inline]
fn has_newline(bytes: &[u8]) -> bool {
    memchr::memchr(b'\n', bytes).is_some()
}
