//! Byte cursor for index-based scanning.
//!
//! Every scanner in the crate saves and restores cursor positions
//! instead of relying on a regex engine. Searches go through `memchr`.

use memchr::{memchr, memmem};

use crate::Range;

/// A cursor over a byte slice.
///
/// # Example
/// ```
/// use mdpages::cursor::Cursor;
///
/// let input = b"Hello, World!";
/// let mut cursor = Cursor::new(input);
///
/// assert_eq!(cursor.peek(), Some(b'H'));
/// cursor.advance(7);
/// assert_eq!(cursor.peek(), Some(b'W'));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Create a cursor starting at an offset.
    #[inline]
    pub fn new_at(input: &'a [u8], offset: usize) -> Self {
        debug_assert!(offset <= input.len());
        Self {
            input,
            pos: offset.min(input.len()),
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek at the byte just before the cursor.
    #[inline]
    pub fn peek_back(&self) -> Option<u8> {
        self.pos.checked_sub(1).map(|i| self.input[i])
    }

    /// Advance by n bytes, stopping at end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Move to an absolute offset.
    #[inline]
    pub fn seek(&mut self, offset: usize) {
        debug_assert!(offset <= self.input.len());
        self.pos = offset.min(self.input.len());
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Skip a run of bytes matching `pred`, returning how many were skipped.
    #[inline]
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Unconsumed input.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Offset of the next `needle` byte, relative to the cursor.
    #[inline]
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr(needle, self.remaining_slice())
    }

    /// Offset of the next occurrence of `needle`, relative to the cursor.
    #[inline]
    pub fn find_bytes(&self, needle: &[u8]) -> Option<usize> {
        memmem::find(self.remaining_slice(), needle)
    }

    /// Offset of the next newline, relative to the cursor.
    #[inline]
    pub fn find_newline(&self) -> Option<usize> {
        self.find(b'\n')
    }

    /// Consume through the end of the current line.
    ///
    /// Returns the line content without its trailing newline.
    #[inline]
    pub fn consume_line(&mut self) -> Range {
        let start = self.pos;
        match self.find_newline() {
            Some(len) => {
                self.pos += len + 1;
                Range::from_usize(start, start + len)
            }
            None => {
                self.pos = self.input.len();
                Range::from_usize(start, self.pos)
            }
        }
    }
}
