//! Syntax limits of the supported Markdown subset.

use crate::error::{Error, Result};

/// Deepest heading level (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Fence marker that opens and closes a code block.
pub const CODE_FENCE: &str = "```";

/// Longest document accepted, in bytes (`u32` offsets).
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// Fail with [`Error::InputTooLarge`] for text longer than [`MAX_INPUT_LEN`].
#[inline]
pub fn check_input_len(len: usize) -> Result<()> {
    if len > MAX_INPUT_LEN {
        return Err(Error::InputTooLarge {
            len,
            max: MAX_INPUT_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_reasonable() {
        const { assert!(MAX_HEADING_LEVEL == 6) };
        const { assert!(MAX_INPUT_LEN == u32::MAX as usize) };
        assert_eq!(CODE_FENCE.len(), 3);
    }

    #[test]
    fn test_check_input_len() {
        assert_eq!(check_input_len(0), Ok(()));
        assert_eq!(check_input_len(MAX_INPUT_LEN), Ok(()));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_check_input_len_rejects_oversized() {
        assert_eq!(
            check_input_len(MAX_INPUT_LEN + 1),
            Err(Error::InputTooLarge {
                len: MAX_INPUT_LEN + 1,
                max: MAX_INPUT_LEN,
            })
        );
    }
}
