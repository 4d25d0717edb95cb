//! Owned element tree for SVG markup
//!
//! Built from `quick-xml` events. Each element owns its attributes and
//! children, so rewriting a subtree never touches anything else.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::entities;
use crate::error::MarkupError;

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Decoded character data (entities already resolved)
    Text(String),
}

/// Value of an attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Plain decoded string
    Text(String),
    /// Inline style declarations as (property, value) pairs
    Style(Vec<(String, String)>),
}

impl AttributeValue {
    /// The value as a plain string, if it is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::Style(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Text(value.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Look up a plain string attribute by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(AttributeValue::as_text)
    }

    /// Set an attribute, replacing the value in place if it already exists
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = AttributeValue::Text(value.into());
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Remove an attribute, returning its value
    pub fn remove_attribute(&mut self, name: &str) -> Option<AttributeValue> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index).value)
    }

    #[cfg(test)]
    fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Apply `f` to this element and every descendant element, in document order
    pub fn walk_mut<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        f(self);
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.walk_mut(f);
            }
        }
    }

    /// Find the first element with the given name in document order,
    /// consuming the tree
    pub fn into_first_named(self, name: &str) -> Option<Element> {
        if self.name == name {
            return Some(self);
        }
        find_first_named(self.children, name)
    }
}

/// Find the first element named `name` among `nodes` and their descendants
pub fn find_first_named(nodes: Vec<Node>, name: &str) -> Option<Element> {
    nodes.into_iter().find_map(|node| match node {
        Node::Element(el) => el.into_first_named(name),
        Node::Text(_) => None,
    })
}

/// Parse markup into a list of top-level nodes
///
/// Comments, processing instructions, XML declarations and DOCTYPEs are
/// dropped. Whitespace-only text is dropped; other text keeps its
/// surrounding whitespace, which is significant next to a sibling element.
pub fn parse(source: &str) -> Result<Vec<Node>, MarkupError> {
    let mut reader = Reader::from_str(source);
    reader.trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut roots: Vec<Node> = Vec::new();

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| MarkupError::syntax(position, e.to_string()))?;

        match event {
            Event::Start(tag) => stack.push(element_from_tag(&tag, position)?),
            Event::Empty(tag) => {
                let el = element_from_tag(&tag, position)?;
                attach(&mut stack, &mut roots, Node::Element(el));
            }
            Event::End(tag) => {
                let el = stack.pop().ok_or_else(|| {
                    MarkupError::syntax(
                        position,
                        format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(tag.name().as_ref())
                        ),
                    )
                })?;
                attach(&mut stack, &mut roots, Node::Element(el));
            }
            Event::Text(text) => {
                let raw = std::str::from_utf8(&text)
                    .map_err(|e| MarkupError::syntax(position, e.to_string()))?;
                if !raw.trim().is_empty() {
                    let decoded = entities::decode(raw)
                        .map_err(|e| MarkupError::syntax(position, e.to_string()))?;
                    attach(&mut stack, &mut roots, Node::Text(decoded.into_owned()));
                }
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)
                    .map_err(|e| MarkupError::syntax(position, e.to_string()))?;
                if !text.trim().is_empty() {
                    attach(&mut stack, &mut roots, Node::Text(text.to_string()));
                }
            }
            Event::Eof => break,
            // comments, declarations, processing instructions, doctypes
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(MarkupError::syntax(
            source.len(),
            format!("unclosed element <{}>", open.name),
        ));
    }

    Ok(roots)
}

fn element_from_tag(tag: &BytesStart, position: usize) -> Result<Element, MarkupError> {
    let name = std::str::from_utf8(tag.name().as_ref())
        .map_err(|e| MarkupError::syntax(position, e.to_string()))?
        .to_string();

    let mut el = Element::new(name);
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| MarkupError::syntax(position, e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| MarkupError::syntax(position, e.to_string()))?
            .to_string();
        let raw = std::str::from_utf8(&attr.value)
            .map_err(|e| MarkupError::syntax(position, e.to_string()))?;
        let value = entities::decode(raw).map_err(|e| MarkupError::syntax(position, e.to_string()))?;
        el.attributes.push(Attribute::new(key, value));
    }
    Ok(el)
}

fn attach(stack: &mut [Element], roots: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        // Stray top-level text carries no markup
        None if matches!(node, Node::Text(_)) => {}
        None => roots.push(node),
    }
}
