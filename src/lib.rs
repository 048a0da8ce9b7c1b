//! mdpages: Markdown to static HTML pages
//!
//! Converts a restricted Markdown subset into an HTML node tree and
//! renders it into a page template.
//!
//! # Supported syntax
//! - Blocks: `#` headings, fenced code, `>` quotes, `-`/`*` lists,
//!   `1.` lists, paragraphs
//! - Inline: `**bold**`, `_italic_`, `` `code` ``, `[links](url)`,
//!   `![images](url)`
//!
//! No nesting of inline spans or lists, no tables, no raw HTML. Text and
//! attribute values are written without HTML escaping.
//!
//! # Design
//! - Two phases: block segmentation, then inline tokenization per block
//! - No regex: index-based scanning with `memchr`
//! - Pure core: every conversion is a function from text to a value

pub mod block;
mod convert;
pub mod cursor;
mod document;
mod error;
pub mod inline;
pub mod limits;
mod node;
pub mod range;
pub mod render;
pub mod site;

// Re-export primary types
pub use convert::{token_to_node, tokens_to_nodes};
pub use document::{block_to_node, extract_title, markdown_to_html_node, text_to_children, ROOT_TAG};
pub use error::{Error, Result};
pub use inline::{InlineToken, TokenKind};
pub use node::{Attributes, LeafNode, Node, ParentNode};
pub use range::Range;
pub use render::HtmlWriter;

/// Placeholder replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced with the rendered content.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Convert Markdown to an HTML fragment.
///
/// # Example
/// ```
/// let html = mdpages::to_html("# Hello\n\nWorld").unwrap();
/// assert_eq!(html, "<div><h1>Hello</h1><p>World</p></div>");
/// ```
pub fn to_html(markdown: &str) -> Result<String> {
    let root = markdown_to_html_node(markdown)?;
    let mut writer = HtmlWriter::with_capacity_for(markdown.len());
    root.render_into(&mut writer)?;
    Ok(writer.into_string())
}

/// A converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Text of the first `# ` heading.
    pub title: String,
    /// Rendered root node.
    pub content: String,
}

impl Page {
    /// Convert a Markdown document.
    pub fn from_markdown(markdown: &str) -> Result<Self> {
        let content = to_html(markdown)?;
        let title = extract_title(markdown)?;
        Ok(Self { title, content })
    }

    /// Substitute this page into a template.
    pub fn apply_to(&self, template: &str) -> String {
        apply_template(template, &self.title, &self.content)
    }
}

/// Replace every placeholder in `template`, verbatim.
///
/// # Example
/// ```
/// let html = mdpages::apply_template("<title>{{ Title }}</title>{{ Content }}", "Hi", "<p>x</p>");
/// assert_eq!(html, "<title>Hi</title><p>x</p>");
/// ```
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Convert a document and substitute it into `template`.
pub fn render_page(markdown: &str, template: &str) -> Result<String> {
    Ok(Page::from_markdown(markdown)?.apply_to(template))
}
