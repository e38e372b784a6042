//! Ordered XML element tree used as the compilation target.

pub mod writer;

pub use writer::{to_document, to_fragment, WriterOptions, XmlWriteError};

use indexmap::IndexMap;

/// An XML element with ordered attributes and ordered children.
///
/// Child order is part of every plugin schema, so children are kept in
/// insertion order and never sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<XmlElement>,
    text: Option<String>,
}

impl XmlElement {
    pub fn new<T: Into<String>>(tag: T) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Builder form of [`XmlElement::set_attr`].
    pub fn with_attr<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn set_attr<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn set_text<T: Into<String>>(&mut self, text: T) {
        self.text = Some(text.into());
    }

    /// Append `child` and return a handle to it.
    pub fn push(&mut self, child: XmlElement) -> &mut XmlElement {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append an empty child element.
    pub fn sub<T: Into<String>>(&mut self, tag: T) -> &mut XmlElement {
        self.push(XmlElement::new(tag))
    }

    /// Append a child element carrying `text`.
    pub fn sub_text<T: Into<String>, V: Into<String>>(&mut self, tag: T, text: V) -> &mut XmlElement {
        let child = self.sub(tag);
        child.set_text(text);
        child
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Text content, empty when none was set.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && !self.has_text()
    }

    /// Tags of the direct children, in order.
    pub fn child_tags(&self) -> Vec<&str> {
        self.children.iter().map(XmlElement::tag).collect()
    }

    /// First direct child with the given tag.
    pub fn find(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.tag == tag)
    }

    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// Follow a `/`-separated chain of child tags, taking the first match at each level.
    pub fn find_path(&self, path: &str) -> Option<&XmlElement> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.find(segment))
    }

    pub fn find_mut(&mut self, tag: &str) -> Option<&mut XmlElement> {
        self.children.iter_mut().find(|child| child.tag == tag)
    }

    pub fn find_path_mut(&mut self, path: &str) -> Option<&mut XmlElement> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.find_mut(segment))
    }

    /// Text of the child reached by `path`, if that child exists.
    pub fn text_at(&self, path: &str) -> Option<&str> {
        self.find_path(path).map(XmlElement::text)
    }

    /// Remove and return every child, leaving this element childless.
    pub fn take_children(&mut self) -> Vec<XmlElement> {
        std::mem::take(&mut self.children)
    }

    pub fn extend_children<I: IntoIterator<Item = XmlElement>>(&mut self, children: I) {
        self.children.extend(children);
    }
}
