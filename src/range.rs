//! Compact byte range into a source string.
//!
//! Uses `u32` offsets; documents are limited to 4GB.

use crate::limits::MAX_INPUT_LEN;

/// Byte range into an input buffer.
///
/// # Example
/// ```
/// use mdpages::Range;
///
/// let input = "Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.slice_str(input), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics if either value exceeds [`MAX_INPUT_LEN`]. Fallible entry
    /// points reject such inputs with [`Error::InputTooLarge`] first.
    ///
    /// [`Error::InputTooLarge`]: crate::Error::InputTooLarge
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        assert!(
            start <= MAX_INPUT_LEN && end <= MAX_INPUT_LEN,
            "offset out of range: {start}..{end}"
        );
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the text this range refers to.
    ///
    /// # Panics
    /// Panics if the range does not fall on char boundaries of `input`.
    #[inline]
    pub fn slice_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start as usize..self.end as usize]
    }

    /// Smallest range covering both `self` and `other`.
    #[inline]
    pub fn cover(&self, other: Range) -> Range {
        Range::new(self.start.min(other.start), self.end.max(other.end))
    }
}
