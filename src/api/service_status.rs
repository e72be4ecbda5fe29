//! The `GetServiceStatus` result shared by every API section.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::xml::de::one_or_many;
use crate::xml::{XmlDocument, XmlError, XmlNode, TEXT_KEY};

/// Operational status of an API section.
///
/// # Example
///
/// ```rust
/// use mws_api::api::ServiceStatus;
/// use mws_api::xml::XmlDocument;
///
/// let doc = XmlDocument::parse(br#"<GetServiceStatusResponse>
///   <GetServiceStatusResult>
///     <Status>GREEN</Status>
///     <Timestamp>2013-09-05T18:12:21.83Z</Timestamp>
///   </GetServiceStatusResult>
/// </GetServiceStatusResponse>"#).unwrap();
///
/// let status = ServiceStatus::from_document(&doc).unwrap();
/// assert_eq!(status.status, "GREEN");
/// assert!(status.messages.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceStatus {
    /// `GREEN`, `GREEN_I`, `YELLOW` or `RED`.
    pub status: String,
    /// When the status was evaluated.
    pub timestamp: Option<DateTime<Utc>>,
    /// Id of the status message, present for non-green statuses.
    pub message_id: Option<String>,
    /// Status messages, in document order.
    pub messages: Vec<StatusMessage>,
}

/// One localized status message.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    /// Locale of `text`, e.g. `en_US`.
    #[serde(rename = "Locale", default)]
    pub locale: String,
    /// The message.
    #[serde(rename = "Text", default)]
    pub text: String,
}

#[derive(Deserialize)]
struct MessageList {
    #[serde(rename = "Message", default, deserialize_with = "one_or_many")]
    messages: Vec<StatusMessage>,
}

impl ServiceStatus {
    /// Decodes a `GetServiceStatus` response.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::MissingElement`] if the document has no `Status`,
    /// or the coercion error of a malformed field.
    pub fn from_document(doc: &XmlDocument) -> Result<Self, XmlError> {
        let root = doc.root();

        let status = root
            .find_by_key("Status")
            .first()
            .ok_or_else(|| XmlError::MissingElement {
                key: "Status".to_string(),
            })?
            .text()?
            .to_string();

        let timestamp = root
            .find_by_key("Timestamp")
            .first()
            .map(XmlNode::to_time)
            .transpose()?;

        let message_id = root.find_by_key("MessageId").first().and_then(|node| {
            node.value()
                .as_text()
                .or_else(|| node.value().get(TEXT_KEY).and_then(|text| text.as_text()))
                .map(String::from)
        });

        let messages = match root.find_by_key("Messages").first() {
            Some(node) if !node.is_leaf() => node.to_struct::<MessageList>()?.messages,
            _ => Vec::new(),
        };

        Ok(Self {
            status,
            timestamp,
            message_id,
            messages,
        })
    }
}
