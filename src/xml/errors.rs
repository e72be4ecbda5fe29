//! Errors raised while parsing a response document or decoding its nodes.

use thiserror::Error;

/// Error returned by [`XmlDocument`](crate::xml::XmlDocument) parsing and
/// [`XmlNode`](crate::xml::XmlNode) coercions.
///
/// Decode errors are local to the node being decoded; sibling nodes can
/// still be read.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The body is not valid UTF-8.
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The body is empty or not well-formed XML.
    #[error("Failed to parse XML document: {0}")]
    Parse(#[from] roxmltree::Error),

    /// The node holds a scalar where child elements were expected.
    #[error("Node at '{path}' is not a map")]
    NotAMap {
        /// Dotted path of the node.
        path: String,
    },

    /// The node holds child elements where a scalar was expected.
    #[error("Node at '{path}' is not a scalar value")]
    NotAScalar {
        /// Dotted path of the node.
        path: String,
    },

    /// The scalar could not be parsed as the requested type.
    #[error("Cannot convert '{value}' at '{path}' to {target}")]
    InvalidValue {
        /// Dotted path of the node.
        path: String,
        /// The requested type.
        target: &'static str,
        /// The scalar text.
        value: String,
    },

    /// A required element is absent from the document.
    #[error("Element '{key}' not found")]
    MissingElement {
        /// Tag name that was searched for.
        key: String,
    },

    /// The node does not match the shape of the target type.
    #[error("Cannot decode node at '{path}': {source}")]
    Decode {
        /// Dotted path of the node.
        path: String,
        /// The underlying serde error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let error = XmlError::InvalidValue {
            path: "Response.Count".to_string(),
            target: "int",
            value: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot convert 'abc' at 'Response.Count' to int"
        );
    }

    #[test]
    fn test_parse_error_from_roxmltree() {
        let error: XmlError = roxmltree::Document::parse("").unwrap_err().into();
        assert!(error.to_string().starts_with("Failed to parse XML document"));
    }
}
