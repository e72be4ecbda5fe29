//! Error types for building and sending MWS requests.
//!
//! # Error Handling
//!
//! - [`ParameterError`]: A parameter could not be normalized; nothing was sent
//! - [`ResponseError`]: The service answered with a non-success status
//! - [`HttpError`]: Unified error type returned by [`MwsClient::send`](crate::MwsClient::send)
//!
//! Protocol errors do not fail `send` on their own: the response envelope
//! carries them next to the status and body, and
//! [`MwsResponse::error_for_status`](crate::MwsResponse::error_for_status)
//! turns them into an `Err`.
//!
//! # Example
//!
//! ```rust,ignore
//! use mws_api::{HttpError, Parameters};
//!
//! match client.send(&params).await.and_then(|r| Ok(r.error_for_status()?)) {
//!     Ok(response) => println!("{}", response.body_text()),
//!     Err(HttpError::Response(e)) => println!("MWS error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidParameters(e)) => println!("Bad parameters: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use crate::clients::api_error::ApiError;
use thiserror::Error;

/// Error returned when a parameter value cannot be normalized.
///
/// List and nested values must be structured into scalar wire keys before
/// normalization; anything left over fails the whole batch.
///
/// # Example
///
/// ```rust
/// use mws_api::{ParamValue, Parameters, ParameterError};
///
/// let params = Parameters::new().with("k", ParamValue::from(vec![1, 2]));
/// let err = params.normalize().unwrap_err();
/// assert!(matches!(err, ParameterError::UnsupportedType { type_name: "list", .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// The value's type has no wire representation.
    #[error("Unexpected type {type_name} for parameter '{key}'. Structure list and nested values before sending.")]
    UnsupportedType {
        /// The offending parameter key.
        key: String,
        /// The offending value type.
        type_name: &'static str,
    },
}

/// Error returned when the service answers with a non-success status.
///
/// `message` is `Request not success. Reason: {status}`, followed by
/// `: ` and every embedded `Error/Message` joined by newlines when the body
/// carries the protocol error envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The composite error message.
    pub message: String,
    /// Every `Error` element found in the body.
    pub api_errors: Vec<ApiError>,
    /// Request id for error reporting (from the `x-mws-request-id` header).
    pub request_id: Option<String>,
}

/// Unified error type for MWS requests.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Parameters could not be normalized; no request was sent.
    #[error(transparent)]
    InvalidParameters(#[from] ParameterError),

    /// Network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service returned a protocol error.
    #[error(transparent)]
    Response(#[from] ResponseError),
}
