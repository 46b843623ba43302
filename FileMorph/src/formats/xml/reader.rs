//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! XML file reading
//!
//! Parsing builds an owned [`XmlElement`] tree, which is then folded into a
//! [`Value`]: leaves become their text, parents become a mapping keyed by
//! child tag, and repeated tags collect into a list.

use super::element::XmlElement;
use crate::error::{FormatError, FormatResult};
use crate::value::Value;
use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs;
use std::path::Path;

/// Read an XML file from disk and fold it into a value
///
/// # Errors
/// Returns an error if the file cannot be read or is not well-formed XML.
pub fn read_xml<P: AsRef<Path>>(path: P) -> FormatResult<Value> {
    let content = fs::read_to_string(path)?;
    parse_xml(&content)
}

/// Parse an XML string and fold it into a value
///
/// The root tag itself is dropped; only its children populate the result.
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn parse_xml(content: &str) -> FormatResult<Value> {
    let root = parse_element_tree(content)?;
    tracing::debug!("Parsed XML root <{}> with {} children", root.tag, root.children.len());
    Ok(fold(&root))
}

/// Parse an XML string into an element tree
///
/// # Errors
/// Returns an error if the XML is malformed, has no root element, has more
/// than one root element, or leaves an element unclosed.
pub fn parse_element_tree(content: &str) -> FormatResult<XmlElement> {
    let mut reader = Reader::from_str(content);
    // Leaf text is the value itself, so whitespace is kept
    reader.trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(multiple_roots());
                }
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                stack.push(XmlElement::new(tag));
            }
            Event::Empty(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(multiple_roots());
                }
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                attach(&mut stack, &mut root, XmlElement::new(tag));
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched end tags
                if let Some(completed) = stack.pop() {
                    attach(&mut stack, &mut root, completed);
                }
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                push_text(&mut stack, &text);
            }
            Event::CData(e) => {
                let text = String::from_utf8(e.into_inner().into_owned())?;
                push_text(&mut stack, &text);
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(FormatError::MalformedXml(format!(
            "unclosed element <{}>",
            open.tag
        )));
    }

    root.ok_or_else(|| FormatError::MalformedXml("document has no root element".to_string()))
}

fn multiple_roots() -> FormatError {
    FormatError::MalformedXml("document has more than one root element".to_string())
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

/// Only text before the first child counts as the element's text.
fn push_text(stack: &mut [XmlElement], text: &str) {
    if let Some(current) = stack.last_mut()
        && current.children.is_empty()
    {
        current.text.get_or_insert_with(String::new).push_str(text);
    }
}

/// Fold an element tree into a value
#[must_use]
pub fn fold(element: &XmlElement) -> Value {
    if element.is_leaf() {
        return Value::String(element.text.clone().unwrap_or_default());
    }

    let mut entries: IndexMap<String, Value> = IndexMap::new();
    for child in &element.children {
        let folded = fold(child);
        match entries.get_mut(&child.tag) {
            None => {
                entries.insert(child.tag.clone(), folded);
            }
            // fold never yields a list for a single element, so a list here
            // means the tag has already repeated
            Some(Value::List(items)) => items.push(folded),
            Some(existing) => {
                let first = std::mem::take(existing);
                *existing = Value::List(vec![first, folded]);
            }
        }
    }

    Value::Map(entries)
}
