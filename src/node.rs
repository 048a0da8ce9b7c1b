//! HTML node tree.
//!
//! A document renders through exactly two node shapes: a [`LeafNode`]
//! holding literal text and a [`ParentNode`] wrapping an ordered list of
//! children. [`Node`] is the sum of the two.

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::render::HtmlWriter;

/// Ordered attribute map.
///
/// Nodes carry at most two attributes (`src` + `alt`), so entries live
/// inline without a heap allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: SmallVec<[(String, String); 2]>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute.
    ///
    /// An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as ` key="value"` pairs; empty for no attributes.
    pub fn to_html(&self) -> String {
        let mut writer = HtmlWriter::with_capacity_for(0);
        writer.write_attrs(self);
        writer.into_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// A node holding literal text.
///
/// Without a tag the value renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: String,
    pub attrs: Attributes,
}

impl LeafNode {
    /// Build a leaf, failing with [`Error::MissingValue`] if `value` is absent.
    pub fn new(tag: Option<&str>, value: Option<&str>) -> Result<Self> {
        let value = value.ok_or(Error::MissingValue)?;
        Ok(Self {
            tag: tag.map(str::to_owned),
            value: value.to_owned(),
            attrs: Attributes::new(),
        })
    }

    /// Untagged text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    /// Text wrapped in `tag`.
    pub fn tagged(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    /// Render to an HTML string.
    pub fn render(&self) -> String {
        let mut writer = HtmlWriter::with_capacity_for(self.value.len());
        self.render_into(&mut writer);
        writer.into_string()
    }

    /// Render into an existing writer.
    pub fn render_into(&self, writer: &mut HtmlWriter) {
        match &self.tag {
            None => writer.write_str(&self.value),
            Some(tag) => {
                writer.open_tag(tag, &self.attrs);
                writer.write_str(&self.value);
                writer.close_tag(tag);
            }
        }
    }
}

/// A node wrapping child nodes in a tag.
///
/// Both a tag and at least one child are required, at construction and
/// again at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<Node>,
    pub attrs: Attributes,
}

impl ParentNode {
    /// Build a parent node.
    ///
    /// Fails with [`Error::MissingTag`] for an empty tag and
    /// [`Error::MissingChildren`] for an empty child list.
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Result<Self> {
        let node = Self {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        };
        node.validate()?;
        Ok(node)
    }

    /// Add an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    /// Append an already-built child.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    fn validate(&self) -> Result<()> {
        if self.tag.is_empty() {
            return Err(Error::MissingTag);
        }
        if self.children.is_empty() {
            return Err(Error::MissingChildren);
        }
        Ok(())
    }

    /// Render to an HTML string.
    pub fn render(&self) -> Result<String> {
        let mut writer = HtmlWriter::new();
        self.render_into(&mut writer)?;
        Ok(writer.into_string())
    }

    /// Render into an existing writer.
    pub fn render_into(&self, writer: &mut HtmlWriter) -> Result<()> {
        self.validate()?;
        writer.open_tag(&self.tag, &self.attrs);
        for child in &self.children {
            child.render_into(writer)?;
        }
        writer.close_tag(&self.tag);
        Ok(())
    }
}

/// Any node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl Node {
    /// Tag of the node, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Parent(parent) => Some(&parent.tag),
        }
    }

    /// Attributes of the node.
    pub fn attrs(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => &leaf.attrs,
            Node::Parent(parent) => &parent.attrs,
        }
    }

    /// Render to an HTML string.
    pub fn render(&self) -> Result<String> {
        match self {
            Node::Leaf(leaf) => Ok(leaf.render()),
            Node::Parent(parent) => parent.render(),
        }
    }

    /// Render into an existing writer.
    pub fn render_into(&self, writer: &mut HtmlWriter) -> Result<()> {
        match self {
            Node::Leaf(leaf) => {
                leaf.render_into(writer);
                Ok(())
            }
            Node::Parent(parent) => parent.render_into(writer),
        }
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}
