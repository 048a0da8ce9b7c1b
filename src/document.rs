//! Document assembly.
//!
//! Drives segmentation, classification and inline tokenization to build
//! one `div` node per document, with one child per block.

use crate::block::{
    classify, list_items, segment, strip_code_fence, strip_heading, strip_quote_markers, trim_space,
    BlockKind,
};
use crate::convert::{token_to_node, tokens_to_nodes};
use crate::error::{Error, Result};
use crate::inline::{tokenize, InlineToken, TokenKind};
use crate::limits::check_input_len;
use crate::node::{Node, ParentNode};

/// Tag of the root node wrapping every block.
pub const ROOT_TAG: &str = "div";

/// Convert a Markdown document into its root node.
///
/// Fails with [`Error::EmptyDocument`] if the document has no content
/// blocks, [`Error::InputTooLarge`] past [`crate::limits::MAX_INPUT_LEN`],
/// and otherwise with the first error raised by any block.
///
/// # Example
/// ```
/// let root = mdpages::markdown_to_html_node("# Hello\n\nWorld").unwrap();
/// assert_eq!(root.render().unwrap(), "<div><h1>Hello</h1><p>World</p></div>");
/// ```
pub fn markdown_to_html_node(markdown: &str) -> Result<ParentNode> {
    check_input_len(markdown.len())?;
    let children = segment(markdown)
        .iter()
        .map(|block| block_to_node(block))
        .collect::<Result<Vec<_>>>()?;

    if children.is_empty() {
        return Err(Error::EmptyDocument);
    }
    ParentNode::new(ROOT_TAG, children)
}

/// Build the top-level node for one block.
pub fn block_to_node(block: &str) -> Result<Node> {
    let kind = classify(block);
    log::trace!("classified block as {kind:?}: {:?}", first_line(block));

    let node = match kind {
        BlockKind::Heading { .. } => {
            ParentNode::new(kind.tag(), text_to_children(strip_heading(block))?)?
        }
        BlockKind::Code => {
            let code = InlineToken::new(strip_code_fence(block), TokenKind::Code);
            ParentNode::new(kind.tag(), vec![token_to_node(&code)?])?
        }
        BlockKind::Quote => {
            ParentNode::new(kind.tag(), text_to_children(&strip_quote_markers(block))?)?
        }
        BlockKind::UnorderedList | BlockKind::OrderedList => {
            let items = list_items(block, kind)
                .into_iter()
                .map(|item| ParentNode::new("li", text_to_children(item)?).map(Node::from))
                .collect::<Result<Vec<_>>>()?;
            ParentNode::new(kind.tag(), items)?
        }
        BlockKind::Paragraph => ParentNode::new(kind.tag(), text_to_children(block)?)?,
    };

    Ok(node.into())
}

/// Tokenize inline text and convert every token to a node.
pub fn text_to_children(text: &str) -> Result<Vec<Node>> {
    tokens_to_nodes(&tokenize(text)?)
}

/// Text of the first `# ` line, trimmed.
///
/// Lines are scanned in order regardless of block structure; leading
/// whitespace before the `#` is ignored, but `##` never qualifies. Besides
/// `\n`, a lone `\r`, form feed, vertical tab, the `\x1c`..`\x1e`
/// separators, NEL and the Unicode line/paragraph separators end a line.
///
/// # Example
/// ```
/// assert_eq!(mdpages::extract_title("## Not\n# Real").unwrap(), "Real");
/// ```
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .split(is_line_break)
        .find_map(|line| trim_space(line).strip_prefix("# "))
        .map(|title| trim_space(title).to_string())
        .ok_or(Error::NoTitle)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn first_line(block: &str) -> &str {
    block.split('\n').next().unwrap_or(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(markdown: &str) -> String {
        markdown_to_html_node(markdown).unwrap().render().unwrap()
    }

    #[test]
    fn test_paragraphs() {
        let md = "\nThis is **bolded** paragraph\ntext in a p\ntag here\n\nThis is another paragraph with _italic_ text and `code` here\n\n";
        assert_eq!(
            html(md),
            "<div><p>This is <b>bolded</b> paragraph\ntext in a p\ntag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn test_codeblock_not_tokenized() {
        let md = "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```";
        assert_eq!(
            html(md),
            "<div><pre><code>\nThis is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            html("# One\n\n### Three **bold**"),
            "<div><h1>One</h1><h3>Three <b>bold</b></h3></div>"
        );
    }

    #[test]
    fn test_quote_keeps_newlines() {
        assert_eq!(
            html("> first _line_\n> second"),
            "<div><blockquote>first <i>line</i>\nsecond</blockquote></div>"
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            html("- one\n- **two**"),
            "<div><ul><li>one</li><li><b>two</b></li></ul></div>"
        );
        assert_eq!(
            html("1. first\n2. [second](/s)"),
            r#"<div><ol><li>first</li><li><a href="/s">second</a></li></ol></div>"#
        );
    }

    #[test]
    fn test_list_tokenizes_each_line_alone() {
        // The `_` on each line is unmatched on its own.
        assert!(matches!(
            markdown_to_html_node("- a_\n- _b"),
            Err(Error::UnmatchedDelimiter { .. })
        ));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(markdown_to_html_node(""), Err(Error::EmptyDocument));
        assert_eq!(markdown_to_html_node("   \n\n  "), Err(Error::EmptyDocument));
    }

    #[test]
    fn test_empty_inline_content() {
        assert_eq!(markdown_to_html_node("****"), Err(Error::MissingChildren));
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# Hello").unwrap(), "Hello");
        assert_eq!(extract_title("   #   My Title   \n\nSome content").unwrap(), "My Title");
        assert_eq!(
            extract_title("## Not it\n### Also not it\n# Real One\nParagraph").unwrap(),
            "Real One"
        );
        assert_eq!(extract_title("# First Title\n\n# Second Title").unwrap(), "First Title");
        assert_eq!(extract_title("#Hello (no space)\n\n# Proper Title").unwrap(), "Proper Title");
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(
            extract_title("No h1 here\n## Subheading only\nParagraph text"),
            Err(Error::NoTitle)
        );
        assert_eq!(extract_title(""), Err(Error::NoTitle));
    }

    #[test]
    fn test_extract_title_line_breaks() {
        assert_eq!(extract_title("intro\r# T").unwrap(), "T");
        assert_eq!(extract_title("intro\r\n# CRLF\r\n").unwrap(), "CRLF");
        assert_eq!(extract_title("a\u{2028}# Sep\x0cnext").unwrap(), "Sep");
        assert_eq!(extract_title("\x1f# Padded\x1f").unwrap(), "Padded");
    }
}
