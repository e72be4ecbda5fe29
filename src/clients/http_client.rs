//! The core MWS client.
//!
//! This module provides [`MwsClient`], which turns a logical parameter bag
//! into a signed POST request for one API section and dispatches it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::clock::{Clock, SystemClock};
use crate::clients::errors::{HttpError, ParameterError};
use crate::clients::http_request::{HttpMethod, SignedRequest, FORM_CONTENT_TYPE};
use crate::clients::http_response::MwsResponse;
use crate::clients::parameters::{format_timestamp, Parameters};
use crate::clients::signer::{sign, SIGNATURE_METHOD, SIGNATURE_VERSION};
use crate::config::{ApiSection, MwsConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for one MWS API section.
///
/// The client owns an immutable copy of the identity it was built with.
/// Every request is signed over the marketplace host and the section path,
/// even when dispatch is redirected through `api_host`.
///
/// # Thread Safety
///
/// `MwsClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use mws_api::{ApiSection, MwsClient, MwsConfig, SellerId, AccessKeyId, SecretKey};
///
/// let config = MwsConfig::builder()
///     .seller_id(SellerId::new("SellerID").unwrap())
///     .access_key(AccessKeyId::new("AccessKey").unwrap())
///     .secret_key(SecretKey::new("SecretKey").unwrap())
///     .build()
///     .unwrap();
///
/// let client = MwsClient::new(&config, ApiSection::Products);
/// assert_eq!(client.endpoint(), "https://mws.amazonservices.com/Products/2011-10-01");
/// ```
#[derive(Debug)]
pub struct MwsClient {
    client: reqwest::Client,
    config: MwsConfig,
    section: ApiSection,
    /// Scheme and authority requests are dispatched to.
    base_uri: String,
    default_headers: HashMap<String, String>,
    clock: Arc<dyn Clock>,
}

// Verify MwsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MwsClient>();
};

impl MwsClient {
    /// Creates a client for `section` using the system clock.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &MwsConfig, section: ApiSection) -> Self {
        Self::with_clock(config, section, Arc::new(SystemClock))
    }

    /// Creates a client whose request timestamps come from `clock`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_clock(config: &MwsConfig, section: ApiSection, clock: Arc<dyn Clock>) -> Self {
        let host = config.marketplace().endpoint();
        let api_host = config.api_host();
        let base_uri = api_host.map_or_else(
            || format!("https://{host}"),
            |url| url.base_uri().to_string(),
        );

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}mws-api-rust/{SDK_VERSION} (Language=Rust)");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());

        // Proxies and mock servers still see the marketplace host
        if api_host.is_some() {
            default_headers.insert("Host".to_string(), host.to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config: config.clone(),
            section,
            base_uri,
            default_headers,
            clock,
        }
    }

    /// Returns the identity this client signs with.
    #[must_use]
    pub const fn config(&self) -> &MwsConfig {
        &self.config
    }

    /// Returns the API section this client speaks.
    #[must_use]
    pub const fn section(&self) -> &ApiSection {
        &self.section
    }

    /// Returns the marketplace host requests are signed for.
    #[must_use]
    pub const fn host(&self) -> &'static str {
        self.config.marketplace().endpoint()
    }

    /// Returns the section path, e.g. `/Products/2011-10-01`.
    #[must_use]
    pub fn path(&self) -> String {
        self.section.path()
    }

    /// Returns `https://{host}{path}`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("https://{}{}", self.host(), self.path())
    }

    /// Returns the configured marketplace id.
    #[must_use]
    pub const fn marketplace_id(&self) -> &'static str {
        self.config.marketplace().id()
    }

    /// Returns the scheme and authority requests are dispatched to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the signed request for `params` without sending it.
    ///
    /// `params` must already be structured. The identity fields, the section
    /// version and the current timestamp are added, then the encoded query is
    /// signed and the `Signature` field appended. The body is the encoding of
    /// the final query.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if a value cannot be normalized.
    pub fn build_request(&self, params: &Parameters) -> Result<SignedRequest, ParameterError> {
        let mut query = params.normalize()?;

        let seller_id: &str = self.config.seller_id().as_ref();
        let access_key: &str = self.config.credential().access_key().as_ref();
        let secret_key: &str = self.config.credential().secret_key().as_ref();

        query.set("SellerId", seller_id);
        if let Some(token) = self.config.auth_token() {
            query.set("MWSAuthToken", token);
        }
        query.set("SignatureMethod", SIGNATURE_METHOD);
        query.set("SignatureVersion", SIGNATURE_VERSION);
        query.set("AWSAccessKeyId", access_key);
        query.set("Version", self.section.version());
        query.set("Timestamp", format_timestamp(&self.clock.now()));

        let path = self.path();
        let signature = sign(
            HttpMethod::Post,
            self.host(),
            &path,
            &query.encode(),
            secret_key,
        );
        query.set("Signature", signature);

        let body = query.encode();
        let mut headers = self.default_headers.clone();
        headers.insert("Content-Length".to_string(), body.len().to_string());

        Ok(SignedRequest {
            http_method: HttpMethod::Post,
            url: format!("{}{path}", self.base_uri),
            query,
            body,
            headers,
        })
    }

    /// Signs and sends `params`, returning the classified response.
    ///
    /// A non-success status is not an `Err`: the response carries it in
    /// [`MwsResponse::error`] next to the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidParameters`] before any I/O if a value
    /// cannot be normalized, and [`HttpError::Network`] if the request
    /// cannot be delivered or its body cannot be read.
    pub async fn send(&self, params: &Parameters) -> Result<MwsResponse, HttpError> {
        let request = self.build_request(params)?;

        tracing::debug!(
            action = request.action().unwrap_or_default(),
            endpoint = %request.url,
            section = %self.section,
            "Sending MWS request"
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(request.body).send().await?;

        let code = res.status().as_u16();
        let status = res.status().to_string();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(code, "Received MWS response");

        let response = MwsResponse::new(code, status, headers, body);
        if let Some(error) = &response.error {
            tracing::warn!(
                code = error.code,
                request_id = error.request_id.as_deref().unwrap_or_default(),
                "MWS request failed: {}",
                error.message
            );
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::clock::FixedClock;
    use crate::config::{AccessKeyId, HostUrl, SecretKey, SellerId};
    use chrono::{TimeZone, Utc};

    fn config_builder() -> crate::config::MwsConfigBuilder {
        MwsConfig::builder()
            .seller_id(SellerId::new("SellerID").unwrap())
            .region("US")
            .access_key(AccessKeyId::new("AccessKey").unwrap())
            .secret_key(SecretKey::new("SecretKey").unwrap())
    }

    fn fixed_clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2015, 10, 20, 22, 46, 7).unwrap(),
        ))
    }

    fn price_params() -> Parameters {
        Parameters::new()
            .with("Action", "GetMyPriceForASIN")
            .with("MarketplaceId", "Marketplace")
            .with("ASINList", vec!["ASIN"])
            .structure("ASINList", &["ASIN"])
    }

    #[test]
    fn test_client_resolves_endpoint_from_region() {
        let config = config_builder().build().unwrap();
        let client = MwsClient::new(&config, ApiSection::Products);

        assert_eq!(client.host(), "mws.amazonservices.com");
        assert_eq!(client.path(), "/Products/2011-10-01");
        assert_eq!(client.base_uri(), "https://mws.amazonservices.com");
        assert_eq!(client.marketplace_id(), "ATVPDKIKX0DER");
        assert_eq!(
            client.endpoint(),
            "https://mws.amazonservices.com/Products/2011-10-01"
        );
    }

    #[test]
    fn test_build_request_matches_pinned_signature() {
        let config = config_builder().auth_token("AuthToken").build().unwrap();
        let client = MwsClient::with_clock(&config, ApiSection::Products, fixed_clock());

        let request = client.build_request(&price_params()).unwrap();

        assert_eq!(
            request.signature(),
            Some("MSwoBGqrM1h7IqQ8QIZo3sNvCKuV3zvTUKO/FAAWNt0=")
        );
        assert_eq!(request.action(), Some("GetMyPriceForASIN"));
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(
            request.url,
            "https://mws.amazonservices.com/Products/2011-10-01"
        );
        assert!(request.body.starts_with(
            "ASINList.ASIN.1=ASIN&AWSAccessKeyId=AccessKey&Action=GetMyPriceForASIN&MWSAuthToken=AuthToken"
        ));
        assert!(request
            .body
            .contains("&Signature=MSwoBGqrM1h7IqQ8QIZo3sNvCKuV3zvTUKO%2FFAAWNt0%3D&"));
        assert!(request.body.ends_with("&Version=2011-10-01"));
    }

    #[test]
    fn test_build_request_is_reproducible_with_fixed_clock() {
        let config = config_builder().build().unwrap();
        let client = MwsClient::with_clock(&config, ApiSection::Orders, fixed_clock());

        let first = client.build_request(&price_params()).unwrap();
        let second = client.build_request(&price_params()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.query.get("Timestamp"), Some("2015-10-20T22:46:07Z"));
        assert_eq!(first.query.get("Version"), Some("2013-09-01"));
    }

    #[test]
    fn test_build_request_omits_empty_auth_token() {
        let config = config_builder().auth_token("").build().unwrap();
        let client = MwsClient::with_clock(&config, ApiSection::Products, fixed_clock());

        let request = client.build_request(&price_params()).unwrap();
        assert!(request.query.get("MWSAuthToken").is_none());
        assert_eq!(request.query.get("SellerId"), Some("SellerID"));
        assert_eq!(request.query.get("SignatureMethod"), Some("HmacSHA256"));
        assert_eq!(request.query.get("SignatureVersion"), Some("2"));
    }

    #[test]
    fn test_build_request_sets_form_headers() {
        let config = config_builder().build().unwrap();
        let client = MwsClient::with_clock(&config, ApiSection::Products, fixed_clock());

        let request = client.build_request(&price_params()).unwrap();
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            request.headers.get("Content-Length"),
            Some(&request.body.len().to_string())
        );
        assert!(request.headers.get("Host").is_none());
    }

    #[test]
    fn test_build_request_rejects_unstructured_list() {
        let config = config_builder().build().unwrap();
        let client = MwsClient::new(&config, ApiSection::Products);

        let params = Parameters::new()
            .with("Action", "GetMatchingProduct")
            .with("ASINList", vec!["A", "B"]);

        let err = client.build_request(&params).unwrap_err();
        assert!(matches!(
            err,
            ParameterError::UnsupportedType { type_name: "list", .. }
        ));
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = config_builder().build().unwrap();
        let client = MwsClient::new(&config, ApiSection::Products);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("mws-api-rust/"));
        assert!(user_agent.ends_with("(Language=Rust)"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = config_builder()
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = MwsClient::new(&config, ApiSection::Products);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | mws-api-rust/"));
    }

    #[test]
    fn test_api_host_redirects_dispatch_but_not_signing() {
        let config = config_builder()
            .auth_token("AuthToken")
            .api_host(HostUrl::new("http://127.0.0.1:8080/").unwrap())
            .build()
            .unwrap();
        let client = MwsClient::with_clock(&config, ApiSection::Products, fixed_clock());

        assert_eq!(client.base_uri(), "http://127.0.0.1:8080");
        assert_eq!(
            client.default_headers().get("Host").map(String::as_str),
            Some("mws.amazonservices.com")
        );

        let request = client.build_request(&price_params()).unwrap();
        assert_eq!(request.url, "http://127.0.0.1:8080/Products/2011-10-01");
        assert_eq!(
            request.signature(),
            Some("MSwoBGqrM1h7IqQ8QIZo3sNvCKuV3zvTUKO/FAAWNt0=")
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MwsClient>();
    }
}
