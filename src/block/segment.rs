//! Block segmentation.
//!
//! Line-oriented: a run of non-blank lines forms one block, and any
//! whitespace-only line ends it.

use std::borrow::Cow;

use memchr::memmem;

use crate::cursor::Cursor;
use crate::Range;

/// Split a document into trimmed, non-empty blocks in source order.
///
/// # Panics
/// Panics for documents longer than [`crate::limits::MAX_INPUT_LEN`];
/// [`crate::markdown_to_html_node`] rejects those with an error instead.
///
/// # Example
/// ```
/// use mdpages::block::segment;
///
/// let blocks = segment("# Heading\n\nSome text\n  \n- a\n- b\n");
/// assert_eq!(blocks, vec!["# Heading", "Some text", "- a\n- b"]);
/// ```
pub fn segment(document: &str) -> Vec<String> {
    let text = normalize_line_endings(document);
    let mut cursor = Cursor::new(text.as_bytes());
    let mut blocks = Vec::new();
    let mut run: Option<Range> = None;

    while !cursor.is_eof() {
        let line = cursor.consume_line();
        if is_blank(line.slice_str(&text)) {
            if let Some(block) = run.take() {
                push_block(&text, block, &mut blocks);
            }
        } else {
            run = Some(run.map_or(line, |block| block.cover(line)));
        }
    }
    if let Some(block) = run {
        push_block(&text, block, &mut blocks);
    }

    blocks
}

/// Convert `\r\n` to `\n`, borrowing when there is nothing to convert.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if memmem::find(text.as_bytes(), b"\r\n").is_some() {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Whitespace as Markdown sources use it: Unicode whitespace plus the
/// `\x1c`..`\x1f` separator controls.
#[inline]
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// `str::trim` over [`is_space`].
#[inline]
pub(crate) fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

#[inline]
fn is_blank(line: &str) -> bool {
    line.chars().all(is_space)
}

fn push_block(text: &str, run: Range, blocks: &mut Vec<String>) {
    let block = trim_space(run.slice_str(text));
    if !block.is_empty() {
        blocks.push(block.to_owned());
    }
}
