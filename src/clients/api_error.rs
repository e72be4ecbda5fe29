//! The protocol-level error envelope.
//!
//! MWS reports failures as `Error` elements, alone in an `ErrorResponse` or
//! embedded in a per-item result:
//!
//! ```xml
//! <ErrorResponse>
//!   <Error>
//!     <Type>Sender</Type>
//!     <Code>InvalidParameterValue</Code>
//!     <Message>Invalid ASIN</Message>
//!     <Detail/>
//!   </Error>
//! </ErrorResponse>
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::xml::{XmlError, XmlNode};

/// Tag of the error envelope.
pub const ERROR_KEY: &str = "Error";

/// One `Error` element. Missing children decode as empty strings.
#[derive(Clone, Debug, Default, Deserialize, Error, PartialEq, Eq)]
#[error("{error_type} {code}: {message}")]
pub struct ApiError {
    /// `Sender` or `Receiver`.
    #[serde(rename = "Type", default)]
    pub error_type: String,
    /// Machine-readable error code.
    #[serde(rename = "Code", default)]
    pub code: String,
    /// Human-readable message.
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Additional detail, usually empty.
    #[serde(rename = "Detail", default)]
    pub detail: String,
}

impl XmlNode<'_> {
    /// Returns `true` if an `Error` element exists anywhere below this node.
    #[must_use]
    pub fn has_error_nodes(&self) -> bool {
        !self.find_by_key(ERROR_KEY).is_empty()
    }

    /// Decodes every `Error` element below this node, in document order.
    ///
    /// # Errors
    ///
    /// Returns the decode error of the first `Error` element that is not an
    /// error envelope.
    pub fn api_errors(&self) -> Result<Vec<ApiError>, XmlError> {
        self.find_by_key(ERROR_KEY)
            .iter()
            .map(XmlNode::to_struct)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlDocument;

    #[test]
    fn test_api_errors_decodes_every_envelope() {
        let doc = XmlDocument::parse_str(
            r"<ErrorResponse>
                <Error><Type>Sender</Type><Code>InvalidParameterValue</Code><Message>foo1</Message><Detail/></Error>
                <Error><Message>foo2</Message></Error>
              </ErrorResponse>",
        )
        .unwrap();
        let root = doc.root();

        assert!(root.has_error_nodes());
        let errors = root.api_errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            ApiError {
                error_type: "Sender".to_string(),
                code: "InvalidParameterValue".to_string(),
                message: "foo1".to_string(),
                detail: String::new(),
            }
        );
        assert_eq!(errors[1].message, "foo2");
        assert_eq!(errors[1].code, "");
        assert_eq!(errors[0].to_string(), "Sender InvalidParameterValue: foo1");
    }

    #[test]
    fn test_nested_error_elements_are_found() {
        let doc = XmlDocument::parse_str(
            r#"<GetMatchingProductResponse>
                 <GetMatchingProductResult ASIN="B0000" status="ClientError">
                   <Error><Code>InvalidParameterValue</Code><Message>Invalid ASIN</Message></Error>
                 </GetMatchingProductResult>
               </GetMatchingProductResponse>"#,
        )
        .unwrap();

        let errors = doc.root().api_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid ASIN");
    }

    #[test]
    fn test_document_without_errors() {
        let doc = XmlDocument::parse_str("<a>b</a>").unwrap();
        assert!(!doc.root().has_error_nodes());
        assert!(doc.root().api_errors().unwrap().is_empty());
    }

    #[test]
    fn test_scalar_error_element_fails_to_decode() {
        let doc = XmlDocument::parse_str("<r><Error>text only</Error></r>").unwrap();
        assert!(matches!(
            doc.root().api_errors(),
            Err(XmlError::NotAMap { .. })
        ));
    }
}
