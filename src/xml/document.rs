//! Schema-less decoding of response documents.
//!
//! An XML document is decoded into a tree of [`XmlValue`]s:
//!
//! - an element with neither attributes nor child elements becomes
//!   [`XmlValue::Text`] with its trimmed text
//! - any other element becomes [`XmlValue::Map`], where attribute `Foo` is
//!   keyed `-Foo`, child elements are keyed by tag name, and text next to
//!   attributes or children is keyed `#text`
//! - sibling elements sharing a tag collapse into one [`XmlValue::List`]
//!   entry, positioned where the tag first appears
//!
//! Namespace declarations are dropped and names are local names.

use crate::xml::errors::XmlError;
use crate::xml::node::XmlNode;

/// Key prefix for attributes.
pub const ATTRIBUTE_PREFIX: char = '-';

/// Key for text content sitting next to attributes or child elements.
pub const TEXT_KEY: &str = "#text";

/// A decoded XML value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlValue {
    /// Scalar text.
    Text(String),
    /// Attributes and child elements, in document order.
    Map(Vec<(String, XmlValue)>),
    /// Repeated sibling elements.
    List(Vec<XmlValue>),
}

impl XmlValue {
    /// Returns the entry under `key` when this value is a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries
                .iter()
                .find_map(|(name, value)| (name == key).then_some(value)),
            _ => None,
        }
    }

    /// Returns the scalar text when this value is [`XmlValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Converts the value to JSON: maps become objects, lists become arrays,
    /// text becomes strings.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Text(text) => serde_json::Value::String(text.clone()),
            Self::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Self::List(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
        }
    }
}

/// A decoded response document.
///
/// # Example
///
/// ```rust
/// use mws_api::xml::XmlDocument;
///
/// let doc = XmlDocument::parse(b"<Response><Status>GREEN</Status></Response>").unwrap();
/// let status = doc.root().find_by_key("Status");
/// assert_eq!(status[0].text().unwrap(), "GREEN");
/// assert_eq!(status[0].path(), "Response.Status");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlValue,
}

impl XmlDocument {
    /// Parses a UTF-8 XML body.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::InvalidUtf8`] or [`XmlError::Parse`] for bodies
    /// that are not UTF-8 or not well-formed XML, including empty bodies.
    pub fn parse(body: &[u8]) -> Result<Self, XmlError> {
        Self::parse_str(std::str::from_utf8(body)?)
    }

    /// Parses an XML string.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::Parse`] if `text` is not well-formed XML.
    pub fn parse_str(text: &str) -> Result<Self, XmlError> {
        let document = roxmltree::Document::parse(text)?;
        let root = document.root_element();
        Ok(Self {
            root: XmlValue::Map(vec![(
                root.tag_name().name().to_string(),
                element_value(root),
            )]),
        })
    }

    /// Returns the navigator positioned at the document root.
    ///
    /// The root's only key is the document element's tag; its path is empty.
    #[must_use]
    pub fn root(&self) -> XmlNode<'_> {
        XmlNode::new(&self.root, "")
    }
}

fn element_value(element: roxmltree::Node<'_, '_>) -> XmlValue {
    let mut entries: Vec<(String, XmlValue)> = element
        .attributes()
        .map(|attr| {
            (
                format!("{ATTRIBUTE_PREFIX}{}", attr.name()),
                XmlValue::Text(attr.value().to_string()),
            )
        })
        .collect();

    let mut text = String::new();
    for child in element.children() {
        if child.is_element() {
            insert_child(&mut entries, child.tag_name().name(), element_value(child));
        } else if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        }
    }

    let text = text.trim();
    if entries.is_empty() {
        return XmlValue::Text(text.to_string());
    }
    if !text.is_empty() {
        entries.push((TEXT_KEY.to_string(), XmlValue::Text(text.to_string())));
    }
    XmlValue::Map(entries)
}

fn insert_child(entries: &mut Vec<(String, XmlValue)>, tag: &str, value: XmlValue) {
    match entries.iter_mut().find(|(name, _)| name == tag) {
        Some((_, XmlValue::List(items))) => items.push(value),
        Some((_, existing)) => {
            let first = std::mem::replace(existing, XmlValue::List(Vec::new()));
            *existing = XmlValue::List(vec![first, value]);
        }
        None => entries.push((tag.to_string(), value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> XmlValue {
        XmlValue::Text(value.to_string())
    }

    #[test]
    fn test_parse_rejects_empty_body() {
        assert!(matches!(XmlDocument::parse(b""), Err(XmlError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_non_xml() {
        assert!(matches!(
            XmlDocument::parse(b"This is not a xml"),
            Err(XmlError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        assert!(matches!(
            XmlDocument::parse(&[0x3c, 0x61, 0xff, 0x3e]),
            Err(XmlError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_attributes_and_text_use_pseudo_keys() {
        let doc = XmlDocument::parse_str(
            r#"<MessageId MarketplaceID="ATVPDKDDIKX0D" SKU="24478624">173964729</MessageId>"#,
        )
        .unwrap();

        assert_eq!(
            doc.root,
            XmlValue::Map(vec![(
                "MessageId".to_string(),
                XmlValue::Map(vec![
                    ("-MarketplaceID".to_string(), text("ATVPDKDDIKX0D")),
                    ("-SKU".to_string(), text("24478624")),
                    ("#text".to_string(), text("173964729")),
                ])
            )])
        );
    }

    #[test]
    fn test_repeated_tags_collapse_into_list() {
        let doc = XmlDocument::parse_str("<a><b>1</b><c>x</c><b>2</b><b>3</b></a>").unwrap();
        let a = doc.root.get("a").unwrap();

        assert_eq!(
            a.get("b"),
            Some(&XmlValue::List(vec![text("1"), text("2"), text("3")]))
        );
        let XmlValue::Map(entries) = a else {
            panic!("expected map");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_namespaces_are_dropped() {
        let doc = XmlDocument::parse_str(
            r#"<Response xmlns="http://mws.amazonservices.com/doc/2009-01-01/"><ns2:Item xmlns:ns2="urn:x">v</ns2:Item></Response>"#,
        )
        .unwrap();
        let response = doc.root.get("Response").unwrap();

        assert_eq!(response, &XmlValue::Map(vec![("Item".to_string(), text("v"))]));
    }

    #[test]
    fn test_empty_element_is_empty_text() {
        let doc = XmlDocument::parse_str("<a><b/><c>  </c></a>").unwrap();
        let a = doc.root.get("a").unwrap();
        assert_eq!(a.get("b"), Some(&text("")));
        assert_eq!(a.get("c"), Some(&text("")));
    }

    #[test]
    fn test_to_json_mirrors_tree() {
        let doc = XmlDocument::parse_str(r#"<a id="1"><b>x</b><b>y</b></a>"#).unwrap();
        assert_eq!(
            doc.root.to_json(),
            serde_json::json!({ "a": { "-id": "1", "b": ["x", "y"] } })
        );
    }
}
