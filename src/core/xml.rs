//! JSON to XML conversion
//!
//! Objects become nested tags named after their keys, arrays become
//! repeated `<item>` siblings, and the whole document is wrapped in a
//! single `<root>` element so any JSON value yields well-formed XML.
//! Object key order is preserved.

use crate::utils::error::{AppError, AppResult};
use serde_json::Value;

const ROOT_TAG: &str = "root";
const ARRAY_ITEM_TAG: &str = "item";

/// Convert a JSON string to an XML string.
pub fn json_to_xml(input: &str) -> AppResult<String> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| AppError::InvalidInput(format!("Invalid JSON: {}", e)))?;

    let mut out = String::new();
    write_element(ROOT_TAG, &value, &mut out);
    Ok(out)
}

fn write_element(tag: &str, value: &Value, out: &mut String) {
    match value {
        Value::Null => {
            out.push('<');
            out.push_str(tag);
            out.push_str("/>");
        }
        Value::Object(map) => {
            open_tag(tag, out);
            for (key, child) in map {
                write_element(key, child, out);
            }
            close_tag(tag, out);
        }
        Value::Array(items) => {
            open_tag(tag, out);
            for item in items {
                write_element(ARRAY_ITEM_TAG, item, out);
            }
            close_tag(tag, out);
        }
        Value::String(s) => {
            open_tag(tag, out);
            out.push_str(&escape_text(s));
            close_tag(tag, out);
        }
        Value::Bool(b) => {
            open_tag(tag, out);
            out.push_str(if *b { "true" } else { "false" });
            close_tag(tag, out);
        }
        Value::Number(n) => {
            open_tag(tag, out);
            out.push_str(&n.to_string());
            close_tag(tag, out);
        }
    }
}

fn open_tag(tag: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_becomes_a_single_element() {
        assert_eq!(json_to_xml("42").unwrap(), "<root>42</root>");
        assert_eq!(json_to_xml("\"hi\"").unwrap(), "<root>hi</root>");
        assert_eq!(json_to_xml("true").unwrap(), "<root>true</root>");
        assert_eq!(json_to_xml("null").unwrap(), "<root/>");
    }

    #[test]
    fn object_keys_become_nested_tags() {
        let xml = json_to_xml(r#"{"name": "Ada", "age": 36}"#).unwrap();
        assert_eq!(xml, "<root><name>Ada</name><age>36</age></root>");
    }

    #[test]
    fn arrays_become_repeated_item_elements() {
        let xml = json_to_xml(r#"{"x": [1, 2]}"#).unwrap();
        assert_eq!(xml, "<root><x><item>1</item><item>2</item></x></root>");
    }

    #[test]
    fn nested_structures_recurse() {
        let xml = json_to_xml(r#"{"user": {"tags": ["a", "b"], "id": 1}}"#).unwrap();
        assert_eq!(
            xml,
            "<root><user><tags><item>a</item><item>b</item></tags><id>1</id></user></root>"
        );
    }

    #[test]
    fn object_key_order_is_preserved() {
        let xml = json_to_xml(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        assert_eq!(xml, "<root><z>1</z><a>2</a><m>3</m></root>");
    }

    #[test]
    fn text_content_is_escaped() {
        let xml = json_to_xml(r#"{"msg": "a < b & b > c"}"#).unwrap();
        assert_eq!(xml, "<root><msg>a &lt; b &amp; b &gt; c</msg></root>");
    }

    #[test]
    fn top_level_array_uses_item_elements() {
        let xml = json_to_xml("[1, [2, 3]]").unwrap();
        assert_eq!(
            xml,
            "<root><item>1</item><item><item>2</item><item>3</item></item></root>"
        );
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = json_to_xml("{not json").unwrap_err();
        assert!(matches!(err, crate::utils::error::AppError::InvalidInput(_)));
    }
}
