//! Opaque renderable markup tree.
//!
//! Components accept any [`Content`] and place it into their template without
//! inspecting its shape. The same tree can be queried in tests or serialized
//! to HTML.

use std::fmt::Write as _;

/// Arbitrary nested content supplied by an application.
pub type Content = Node;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A node of rendered markup.
pub enum Node {
    /// Element with attributes and children.
    Element(Element),
    /// Text leaf, stored unescaped.
    Text(String),
    /// Ordered group of sibling nodes without a wrapper.
    Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An element node.
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an existing value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Sets the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Element tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Looks up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whitespace-separated class list.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or_default().split_whitespace()
    }

    /// Child nodes in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl Node {
    /// Empty content.
    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element when this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first, pre-order walk over every element.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        let children = match self {
            Self::Text(_) => return,
            Self::Element(element) => {
                out.push(element);
                &element.children
            }
            Self::Fragment(children) => children,
        };
        for child in children {
            child.collect_elements(out);
        }
    }

    /// First element carrying `data-ui-kind="{kind}"`.
    pub fn find_kind(&self, kind: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|element| element.get_attr("data-ui-kind") == Some(kind))
    }

    /// First element carrying `data-ui-slot="{slot}"`.
    pub fn find_slot(&self, slot: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|element| element.get_attr("data-ui-slot") == Some(slot))
    }

    /// Number of elements carrying `data-ui-slot="{slot}"`.
    pub fn count_slot(&self, slot: &str) -> usize {
        self.elements()
            .into_iter()
            .filter(|element| element.get_attr("data-ui-slot") == Some(slot))
            .count()
    }

    /// Returns whether `needle` appears anywhere in this tree, unchanged.
    pub fn contains(&self, needle: &Node) -> bool {
        if self == needle {
            return true;
        }
        match self {
            Self::Text(_) => false,
            Self::Element(element) => element.children.iter().any(|child| child.contains(needle)),
            Self::Fragment(children) => children.iter().any(|child| child.contains(needle)),
        }
    }

    /// Every class name used anywhere in the tree, in document order.
    pub fn class_names(&self) -> Vec<&str> {
        self.elements()
            .into_iter()
            .flat_map(|element| element.classes())
            .collect()
    }

    /// Serializes the tree to HTML with text and attribute escaping.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape(text, false)),
            Self::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
            Self::Element(element) => {
                let _ = write!(out, "<{}", element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {name}=\"{}\"", escape(value, true));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

/// Elements serialized without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

fn escape(raw: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Self::Fragment(children)
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(Self::empty)
    }
}
