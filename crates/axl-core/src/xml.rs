//! Namespace-agnostic element tree for AXL responses
//!
//! CUCM qualifies response elements with whatever namespace prefixes it
//! fancies, so everything here matches on local names only.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{AxlError, Result};

/// A parsed XML element: local name, attributes, text content, children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    /// Element name with any namespace prefix stripped
    pub name: String,
    /// Attribute name/value pairs, xmlns declarations excluded
    pub attributes: Vec<(String, String)>,
    /// Concatenated text content of this element
    pub text: String,
    /// Child elements in document order
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse a document into its root element.
    pub fn parse(xml: &str) -> Result<XmlNode> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(node_from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let node = node_from_start(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&e.unescape().map_err(AxlError::xml)?);
                    }
                }
                Ok(Event::End(_)) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| AxlError::Xml("unbalanced end tag".into()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
                Ok(Event::Eof) => {
                    return Err(AxlError::Xml("unexpected end of document".into()));
                }
                Err(e) => return Err(AxlError::xml(e)),
                _ => {}
            }
            buf.clear();
        }
    }

    /// First direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given local name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Depth-first search for a descendant with the given local name.
    pub fn descendant(&self, name: &str) -> Option<&XmlNode> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// Trimmed text of a direct child, `None` when absent or empty.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(XmlNode::non_empty_text)
    }

    /// Trimmed text of this element, `None` when empty.
    pub fn non_empty_text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn node_from_start(e: &BytesStart<'_>) -> Result<XmlNode> {
    let name = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(AxlError::xml)?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        attributes.push((
            String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned(),
            attr.unescape_value().map_err(AxlError::xml)?.into_owned(),
        ));
    }
    Ok(XmlNode {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}
