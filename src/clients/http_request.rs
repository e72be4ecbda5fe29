//! Signed request types.
//!
//! [`MwsClient::build_request`](crate::MwsClient::build_request) produces a
//! [`SignedRequest`]: everything needed to dispatch the call, computed
//! without any I/O.

use std::collections::HashMap;
use std::fmt;

use crate::clients::parameters::QueryParams;

/// `Content-Type` of every MWS request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP methods that can appear in a string to sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST, used for every MWS operation.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A fully signed MWS request.
///
/// `body` is the encoding of `query`, which includes the `Signature`
/// parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// The URL the request is dispatched to.
    pub url: String,
    /// The final query parameters, `Signature` included.
    pub query: QueryParams,
    /// The form-encoded body.
    pub body: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
}

impl SignedRequest {
    /// Returns the `Action` parameter, if any.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.query.get("Action")
    }

    /// Returns the `Signature` parameter.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.query.get("Signature")
    }
}
