//! Block classification result.

/// Kind of a block-level unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default for text matching no other kind.
    Paragraph,
    /// `#` heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
    },
    /// Fenced code block.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- ` or `* `.
    UnorderedList,
    /// Lines numbered `1. ` through `n. `.
    OrderedList,
}

impl BlockKind {
    /// HTML tag of the element this block renders as.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Heading { level } => match level {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            Self::Code => "pre",
            Self::Quote => "blockquote",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
        }
    }
}
