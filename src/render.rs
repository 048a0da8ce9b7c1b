//! HTML output writer.
//!
//! Nodes render into one growing buffer rather than concatenating
//! per-child strings.

use crate::node::Attributes;

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use mdpages::{Attributes, HtmlWriter};
///
/// let mut attrs = Attributes::new();
/// attrs.insert("href", "https://example.com");
///
/// let mut writer = HtmlWriter::with_capacity_for(32);
/// writer.open_tag("a", &attrs);
/// writer.write_str("home");
/// writer.close_tag("a");
///
/// assert_eq!(writer.into_string(), r#"<a href="https://example.com">home</a>"#);
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Rendered HTML is typically ~1.25x the Markdown input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write text verbatim.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write `<tag ATTRS>`.
    #[inline]
    pub fn open_tag(&mut self, tag: &str, attrs: &Attributes) {
        self.out.push('<');
        self.out.push_str(tag);
        self.write_attrs(attrs);
        self.out.push('>');
    }

    /// Write `</tag>`.
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write each attribute as ` key="value"`, in insertion order.
    ///
    /// Values are written unescaped; a `"` inside a value ends the
    /// attribute early in the output.
    pub fn write_attrs(&mut self, attrs: &Attributes) {
        for (key, value) in attrs.iter() {
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            self.out.push_str(value);
            self.out.push('"');
        }
    }

    /// Consume the writer and return the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_without_attrs() {
        let mut writer = HtmlWriter::new();
        writer.open_tag("p", &Attributes::new());
        writer.write_str("text");
        writer.close_tag("p");
        assert_eq!(writer.into_string(), "<p>text</p>");
    }

    #[test]
    fn test_attrs_keep_insertion_order() {
        let mut attrs = Attributes::new();
        attrs.insert("src", "a.png");
        attrs.insert("alt", "A");
        let mut writer = HtmlWriter::new();
        writer.write_attrs(&attrs);
        assert_eq!(writer.into_string(), r#" src="a.png" alt="A""#);
    }

    #[test]
    fn test_attr_values_not_escaped() {
        let mut attrs = Attributes::new();
        attrs.insert("href", "a\"b");
        let mut writer = HtmlWriter::new();
        writer.write_attrs(&attrs);
        assert_eq!(writer.into_string(), " href=\"a\"b\"");
    }
}
