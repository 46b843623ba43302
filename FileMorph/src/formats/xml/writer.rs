//! XML file writing
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use super::element::XmlElement;
use crate::error::{FormatError, FormatResult};
use crate::formats::Format;
use crate::value::Value;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs;
use std::path::Path;

/// Tag of the document element written around every saved mapping.
pub const ROOT_TAG: &str = "root";

/// Tag of the element written for each list entry.
pub const ITEM_TAG: &str = "item";

/// Write a value to disk as XML
///
/// # Errors
/// Returns an error if the value is not a mapping or the file cannot be written.
pub fn write_xml<P: AsRef<Path>>(value: &Value, path: P) -> FormatResult<()> {
    let xml = serialize_xml(value)?;
    fs::write(path, xml)?;
    Ok(())
}

/// Serialize a mapping to an XML document with a UTF-8 declaration
///
/// # Errors
/// Returns [`FormatError::Shape`] if `value` is not a mapping, or
/// [`FormatError::InvalidElementName`] if a key is not a legal tag name.
pub fn serialize_xml(value: &Value) -> FormatResult<String> {
    let root = unfold(value)?;
    tracing::debug!("Writing XML with {} top-level elements", root.children.len());
    write_element_tree(&root)
}

/// Unfold a mapping into an element tree rooted at [`ROOT_TAG`]
///
/// # Errors
/// Returns an error if `value` is not a mapping or a key is not a legal tag name.
pub fn unfold(value: &Value) -> FormatResult<XmlElement> {
    if !matches!(value, Value::Map(_)) {
        return Err(FormatError::Shape {
            format: Format::Xml,
            expected: "a mapping",
            found: value.shape(),
        });
    }

    let mut root = XmlElement::new(ROOT_TAG);
    fill_element(&mut root, value)?;
    Ok(root)
}

fn fill_element(element: &mut XmlElement, value: &Value) -> FormatResult<()> {
    match value {
        Value::Map(entries) => {
            for (key, child_value) in entries {
                if !is_valid_name(key) {
                    return Err(FormatError::InvalidElementName(key.clone()));
                }
                let mut child = XmlElement::new(key.as_str());
                fill_element(&mut child, child_value)?;
                element.children.push(child);
            }
        }
        Value::List(items) => {
            for item in items {
                let mut child = XmlElement::new(ITEM_TAG);
                fill_element(&mut child, item)?;
                element.children.push(child);
            }
        }
        scalar => element.text = Some(scalar.to_string()),
    }
    Ok(())
}

/// XML 1.0 `Name` production, restricted to non-namespaced names.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Serialize an element tree, preceded by the XML declaration
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn write_element_tree(root: &XmlElement) -> FormatResult<String> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.get_mut().push(b'\n');

    write_element(&mut writer, root)?;

    let xml = String::from_utf8(writer.into_inner())?;
    Ok(xml)
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, element: &XmlElement) -> FormatResult<()> {
    let start = BytesStart::new(element.tag.as_str());

    if element.text.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    if let Some(ref text) = element.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }

    for child in &element.children {
        write_element(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::xml::parse_xml;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

    #[test]
    fn test_mapping_with_list() {
        let value = Value::from(json!({"a": 1, "b": [1, 2, 3]}));
        let xml = serialize_xml(&value).unwrap();
        assert_eq!(
            xml,
            format!("{DECL}<root><a>1</a><b><item>1</item><item>2</item><item>3</item></b></root>")
        );
    }

    #[test]
    fn test_nested_mapping_and_escaping() {
        let value = Value::from(json!({"outer": {"inner": "a < b & c"}, "flag": false, "none": null}));
        let xml = serialize_xml(&value).unwrap();
        assert_eq!(
            xml,
            format!(
                "{DECL}<root><outer><inner>a &lt; b &amp; c</inner></outer><flag>false</flag><none></none></root>"
            )
        );
    }

    #[test]
    fn test_empty_containers_are_empty_elements() {
        let value = Value::from(json!({"list": [], "map": {}}));
        let xml = serialize_xml(&value).unwrap();
        assert_eq!(xml, format!("{DECL}<root><list/><map/></root>"));
    }

    #[test]
    fn test_rejects_non_mapping() {
        for value in [Value::from(json!([1, 2])), Value::from("scalar"), Value::Null] {
            let err = serialize_xml(&value).unwrap_err();
            assert!(matches!(err, FormatError::Shape { format: Format::Xml, .. }));
        }
    }

    #[test]
    fn test_rejects_invalid_key() {
        let err = serialize_xml(&Value::from(json!({"bad key": 1}))).unwrap_err();
        assert!(matches!(err, FormatError::InvalidElementName(ref k) if k == "bad key"));
        assert!(serialize_xml(&Value::from(json!({"1st": 1}))).is_err());
        assert!(serialize_xml(&Value::from(json!({"": 1}))).is_err());
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("_private"));
        assert!(is_valid_name("data-set.v2"));
        assert!(is_valid_name("名前"));
        assert!(!is_valid_name("-dash"));
        assert!(!is_valid_name("a:b"));
    }

    #[test]
    fn test_reload_keeps_mapping_shape() {
        let value = Value::from(json!({"a": 1, "b": [1, 2, 3], "c": {"d": "x"}}));
        let reloaded = parse_xml(&serialize_xml(&value).unwrap()).unwrap();
        assert_eq!(
            reloaded,
            Value::from(json!({"a": "1", "b": {"item": ["1", "2", "3"]}, "c": {"d": "x"}}))
        );
    }
}
