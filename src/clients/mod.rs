//! Request construction, signing and dispatch.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Parameters`] / [`ParamValue`]: The logical parameter bag and its structuring transform
//! - [`QueryParams`]: Normalized parameters in canonical order
//! - [`MwsClient`]: Signs and sends requests for one API section
//! - [`SignedRequest`]: A request built without any I/O
//! - [`MwsResponse`]: The response envelope with its classified error
//! - [`ApiError`]: One protocol-level `Error` element
//! - [`Clock`]: The time source for request timestamps
//!
//! # Example
//!
//! ```rust,ignore
//! use mws_api::{ApiSection, MwsClient, Parameters};
//!
//! let client = MwsClient::new(&config, ApiSection::Products);
//!
//! let params = Parameters::new()
//!     .with("Action", "GetMatchingProduct")
//!     .with("MarketplaceId", client.marketplace_id())
//!     .with("ASINList", vec!["B00005N5PF"])
//!     .structure("ASINList", &["ASIN"]);
//!
//! let response = client.send(&params).await?.error_for_status()?;
//! ```
//!
//! # Retry Behavior
//!
//! None. A failed send returns its error once; throttling shows up in
//! [`MwsResponse::quota`] and as a 503 response.

mod api_error;
mod clock;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod parameters;
mod signer;

pub use api_error::{ApiError, ERROR_KEY};
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{HttpError, ParameterError, ResponseError};
pub use http_client::{MwsClient, SDK_VERSION};
pub use http_request::{HttpMethod, SignedRequest, FORM_CONTENT_TYPE};
pub use http_response::{MwsResponse, QuotaInfo};
pub use parameters::{format_timestamp, ParamValue, Parameters, QueryParams};
pub use signer::{
    compute_signature_base64, sign, string_to_sign, SIGNATURE_METHOD, SIGNATURE_VERSION,
};
