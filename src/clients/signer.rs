//! MWS request signing (Signature Version 2, `HmacSHA256`).
//!
//! The canonical string to sign is the HTTP method, host, path and encoded
//! query joined by newlines:
//!
//! ```text
//! POST
//! mws.amazonservices.com
//! /Products/2011-10-01
//! ASINList.ASIN.1=ASIN&AWSAccessKeyId=...&Version=2011-10-01
//! ```
//!
//! The encoded query must be byte-identical to the body that is sent.

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::clients::http_request::HttpMethod;

type HmacSha256 = Hmac<Sha256>;

/// Value of the `SignatureMethod` parameter.
pub const SIGNATURE_METHOD: &str = "HmacSHA256";

/// Value of the `SignatureVersion` parameter.
pub const SIGNATURE_VERSION: &str = "2";

/// Builds the canonical string to sign. No trailing newline.
#[must_use]
pub fn string_to_sign(method: HttpMethod, host: &str, path: &str, encoded_query: &str) -> String {
    format!("{method}\n{host}\n{path}\n{encoded_query}")
}

/// Computes HMAC-SHA256 of `message` and encodes it as standard base64.
///
/// # Example
///
/// ```rust
/// use mws_api::clients::compute_signature_base64;
///
/// let signature = compute_signature_base64(b"message", "key");
/// assert_eq!(signature, "bp7ym3X//Ft6uuUn1Y/a2y/kLnIZARl2kXNDBl9Y7Uo=");
/// ```
// HMAC accepts keys of any length, so new_from_slice never fails.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn compute_signature_base64(message: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

/// Signs a request: builds the string to sign and returns its base64
/// HMAC-SHA256 under `secret`.
#[must_use]
pub fn sign(
    method: HttpMethod,
    host: &str,
    path: &str,
    encoded_query: &str,
    secret: &str,
) -> String {
    let canonical = string_to_sign(method, host, path, encoded_query);
    tracing::trace!(canonical = %canonical, "Computed MWS string to sign");
    compute_signature_base64(canonical.as_bytes(), secret)
}
