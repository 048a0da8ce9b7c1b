//! Block classification.
//!
//! Predicates are tested in a fixed order and the first match wins:
//! code, heading, quote, unordered list, ordered list, paragraph.

use super::kind::BlockKind;
use super::segment::is_space;
use crate::cursor::Cursor;
use crate::limits::{CODE_FENCE, MAX_HEADING_LEVEL};

/// Classify a trimmed block.
pub fn classify(block: &str) -> BlockKind {
    if is_code(block) {
        return BlockKind::Code;
    }
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading { level };
    }
    if block.split('\n').all(is_quote_line) {
        return BlockKind::Quote;
    }
    if block.split('\n').all(|line| unordered_item(line).is_some()) {
        return BlockKind::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// Block opens and closes with a backtick fence.
fn is_code(block: &str) -> bool {
    block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE)
}

/// Level of a `#`-heading: 1-6 hashes followed by a space.
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let mut cursor = Cursor::new(block.as_bytes());
    let level = cursor.skip_while(|b| b == b'#');
    if (1..=MAX_HEADING_LEVEL).contains(&level) && cursor.at(b' ') {
        Some(level as u8)
    } else {
        None
    }
}

fn is_quote_line(line: &str) -> bool {
    line.starts_with('>')
}

/// Item text of an unordered list line: `-` or `*`, whitespace, content.
///
/// Only the first whitespace character after the marker is consumed.
pub(crate) fn unordered_item(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(['-', '*'])?;
    item_body(rest).map(|(sep, _)| &rest[sep..])
}

/// Marker digits and item text of an ordered list line: `<digits>. <content>`.
///
/// All whitespace after the `.` is consumed.
pub(crate) fn ordered_item(line: &str) -> Option<(&str, &str)> {
    let mut cursor = Cursor::new(line.as_bytes());
    let digits = cursor.skip_while(|b| b.is_ascii_digit());
    if digits == 0 || !cursor.at(b'.') {
        return None;
    }
    item_body(&line[digits + 1..]).map(|(_, body)| (&line[..digits], body))
}

/// Whether a digit run spells `n`, ignoring leading zeros.
///
/// Runs too long for `u64` cannot equal any line number.
fn marker_is(digits: &str, n: u64) -> bool {
    digits
        .trim_start_matches('0')
        .parse::<u64>()
        .is_ok_and(|value| value == n)
}

/// Split `rest` into the separator length and the content after all
/// leading whitespace. Requires at least one whitespace character
/// followed by at least one more character.
fn item_body(rest: &str) -> Option<(usize, &str)> {
    let mut chars = rest.chars();
    let sep = chars.next().filter(|&c| is_space(c))?;
    chars.next()?;
    Some((sep.len_utf8(), rest.trim_start_matches(is_space)))
}

/// Every line numbered, counting up from 1 without gaps.
fn is_ordered_list(block: &str) -> bool {
    let mut expected = 1u64;
    for line in block.split('\n') {
        match ordered_item(line) {
            Some((digits, _)) if marker_is(digits, expected) => expected += 1,
            _ => return false,
        }
    }
    true
}
