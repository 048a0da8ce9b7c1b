//! Block marker stripping.
//!
//! Each function expects a block already classified as its kind.

use super::classify::{heading_level, ordered_item, unordered_item};
use super::kind::BlockKind;
use crate::limits::CODE_FENCE;

/// Heading text after the `#` run and the following space.
pub fn strip_heading(block: &str) -> &str {
    let level = heading_level(block).map_or(0, usize::from);
    block.get(level + 1..).unwrap_or("")
}

/// Code body between the opening and closing fences.
///
/// Only the two fences are removed; a fence too short to hold both
/// yields an empty body.
pub fn strip_code_fence(block: &str) -> &str {
    let fence = CODE_FENCE.len();
    if block.len() < fence * 2 {
        return "";
    }
    block.get(fence..block.len() - fence).unwrap_or("")
}

/// Quote text with `>` (and one optional space) removed from every line.
pub fn strip_quote_markers(block: &str) -> String {
    block
        .split('\n')
        .map(|line| {
            line.strip_prefix("> ")
                .or_else(|| line.strip_prefix('>'))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text of each list item, one per line, markers removed.
pub fn list_items(block: &str, kind: BlockKind) -> Vec<&str> {
    block
        .split('\n')
        .map(|line| match kind {
            BlockKind::UnorderedList => unordered_item(line).unwrap_or(line),
            BlockKind::OrderedList => ordered_item(line).map_or(line, |(_, body)| body),
            _ => line,
        })
        .collect()
}
