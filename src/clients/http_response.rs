//! The response envelope returned by every MWS call.
//!
//! [`MwsResponse`] keeps the status, headers and raw body of the reply, and
//! classifies it on construction:
//!
//! - 1xx and 2xx: no error
//! - 4xx and 5xx whose body holds `Error` elements:
//!   `Request not success. Reason: {status}: {message 1}\n{message 2}...`
//! - anything else: `Request not success. Reason: {status}`
//!
//! The body stays available after classification.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::clients::errors::ResponseError;
use crate::xml::{XmlDocument, XmlError};

/// Request quota information from the `x-mws-quota-*` headers.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use mws_api::clients::QuotaInfo;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-mws-quota-max".to_string(), vec!["200.0".to_string()]);
/// headers.insert("x-mws-quota-remaining".to_string(), vec!["198.0".to_string()]);
///
/// let quota = QuotaInfo::from_headers(&headers).unwrap();
/// assert_eq!(quota.remaining, 198.0);
/// assert!(quota.resets_on.is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuotaInfo {
    /// Requests allowed in the current quota period.
    pub max: f64,
    /// Requests left in the current quota period.
    pub remaining: f64,
    /// When the quota resets.
    pub resets_on: Option<DateTime<Utc>>,
}

impl QuotaInfo {
    /// Parses the quota headers; `None` unless both counts are present.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let max = first("x-mws-quota-max")?.trim().parse().ok()?;
        let remaining = first("x-mws-quota-remaining")?.trim().parse().ok()?;
        let resets_on = first("x-mws-quota-resetson")
            .and_then(|value| DateTime::parse_from_rfc3339(value.trim()).ok())
            .map(|time| time.with_timezone(&Utc));

        Some(Self {
            max,
            remaining,
            resets_on,
        })
    }
}

/// A response from MWS.
#[derive(Clone, Debug)]
pub struct MwsResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The status line, e.g. `404 Not Found`.
    pub status: String,
    /// Response headers, lowercase names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// Quota information, when the service sent it.
    pub quota: Option<QuotaInfo>,
    /// The protocol error, for non-success statuses.
    pub error: Option<ResponseError>,
}

impl MwsResponse {
    /// Creates a response and classifies it.
    #[must_use]
    pub fn new(
        code: u16,
        status: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: Vec<u8>,
    ) -> Self {
        let status = status.into();
        let quota = QuotaInfo::from_headers(&headers);
        let request_id = first_header(&headers, "x-mws-request-id").map(String::from);
        let error = classify(code, &status, &body, request_id);

        Self {
            code,
            status,
            headers,
            body,
            quota,
            error,
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Parses the body into an XML tree. The raw body is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the body is empty or not XML.
    pub fn document(&self) -> Result<XmlDocument, XmlError> {
        XmlDocument::parse(&self.body)
    }

    /// Writes the raw body to `writer`, e.g. a report file.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn write_body_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.body)
    }

    /// Returns the `x-mws-request-id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_header(&self.headers, "x-mws-request-id")
    }

    /// Returns the `x-mws-timestamp` header, parsed.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        first_header(&self.headers, "x-mws-timestamp")
            .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
            .map(|time| time.with_timezone(&Utc))
    }

    /// Returns the response, or its protocol error.
    ///
    /// # Errors
    ///
    /// Returns the [`ResponseError`] of a non-success status.
    pub fn error_for_status(self) -> Result<Self, ResponseError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }
}

fn first_header<'h>(headers: &'h HashMap<String, Vec<String>>, name: &str) -> Option<&'h str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

fn classify(code: u16, status: &str, body: &[u8], request_id: Option<String>) -> Option<ResponseError> {
    if (100..=299).contains(&code) {
        return None;
    }

    let reason = format!("Request not success. Reason: {status}");
    let api_errors = if (400..=599).contains(&code) {
        XmlDocument::parse(body)
            .and_then(|doc| doc.root().api_errors())
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    let message = if api_errors.is_empty() {
        reason
    } else {
        let details = api_errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        format!("{reason}: {details}")
    };

    Some(ResponseError {
        code,
        message,
        api_errors,
        request_id,
    })
}
