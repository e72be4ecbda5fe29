//! Configuration types for the MWS client.
//!
//! This module provides the client identity that every request carries:
//! seller id, optional auth token, marketplace and signing credential.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MwsConfig`]: The immutable client identity
//! - [`MwsConfigBuilder`]: A builder for constructing [`MwsConfig`] instances
//! - [`SellerId`], [`AccessKeyId`], [`SecretKey`]: Validated identity newtypes
//! - [`Credential`]: The access key / secret key pair, with environment fallback
//! - [`Marketplace`]: Region to marketplace id and endpoint host lookup
//! - [`ApiSection`]: The API section and version a client speaks
//! - [`HostUrl`]: An optional base URL overriding the marketplace endpoint
//!
//! # Example
//!
//! ```rust
//! use mws_api::{MwsConfig, SellerId, AccessKeyId, SecretKey};
//!
//! let config = MwsConfig::builder()
//!     .seller_id(SellerId::new("SellerID").unwrap())
//!     .auth_token("AuthToken")
//!     .region("US")
//!     .access_key(AccessKeyId::new("AccessKey").unwrap())
//!     .secret_key(SecretKey::new("SecretKey").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.marketplace().id(), "ATVPDKIKX0DER");
//! ```

mod credential;
mod marketplace;
mod newtypes;
mod section;

pub use credential::{Credential, ACCESS_KEY_ENV, SECRET_KEY_ENV};
pub use marketplace::{Marketplace, DEFAULT_REGION};
pub use newtypes::{AccessKeyId, HostUrl, SecretKey, SellerId};
pub use section::ApiSection;

use crate::error::ConfigError;

/// Identity shared by every request a client sends.
///
/// Built once through [`MwsConfig::builder`] and never mutated afterwards.
///
/// # Thread Safety
///
/// `MwsConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct MwsConfig {
    seller_id: SellerId,
    auth_token: Option<String>,
    marketplace: Marketplace,
    credential: Credential,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl MwsConfig {
    /// Creates a new builder for constructing a `MwsConfig`.
    #[must_use]
    pub fn builder() -> MwsConfigBuilder {
        MwsConfigBuilder::new()
    }

    /// Returns the seller id.
    #[must_use]
    pub const fn seller_id(&self) -> &SellerId {
        &self.seller_id
    }

    /// Returns the MWS auth token, if one was configured.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Returns the resolved marketplace.
    #[must_use]
    pub const fn marketplace(&self) -> &Marketplace {
        &self.marketplace
    }

    /// Returns the signing credential.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MwsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MwsConfig>();
};

/// Builder for constructing [`MwsConfig`] instances.
///
/// `seller_id` is required. Credentials come from the builder when both keys
/// are set, otherwise from the `AWS_ACCESS_KEY` / `AWS_SECRET_KEY`
/// environment variables.
///
/// # Defaults
///
/// - `region`: `"US"`
/// - `auth_token`: `None` (the `MWSAuthToken` parameter is omitted)
/// - `api_host`: `None` (requests go to the marketplace endpoint)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct MwsConfigBuilder {
    seller_id: Option<SellerId>,
    auth_token: Option<String>,
    region: Option<String>,
    access_key: Option<AccessKeyId>,
    secret_key: Option<SecretKey>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl MwsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seller id (required).
    #[must_use]
    pub fn seller_id(mut self, seller_id: SellerId) -> Self {
        self.seller_id = Some(seller_id);
        self
    }

    /// Sets the MWS auth token granted by the seller. An empty token is
    /// treated as absent.
    #[must_use]
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.auth_token = (!token.is_empty()).then_some(token);
        self
    }

    /// Sets the marketplace region code (e.g., "US", "UK", "JP").
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the access key id.
    #[must_use]
    pub fn access_key(mut self, key: AccessKeyId) -> Self {
        self.access_key = Some(key);
        self
    }

    /// Sets the secret key.
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sends requests to `host` instead of the marketplace endpoint.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MwsConfig`], reading missing credentials from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`MwsConfigBuilder::build_with_env`].
    pub fn build(self) -> Result<MwsConfig, ConfigError> {
        self.build_with_env(|name| std::env::var(name).ok())
    }

    /// Builds the [`MwsConfig`], reading missing credentials through `lookup`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if `seller_id` is not set
    /// - [`ConfigError::InvalidRegion`] if the region is not a known marketplace
    /// - [`ConfigError::MissingCredentials`] if neither the builder nor `lookup`
    ///   provide both keys
    pub fn build_with_env<F>(self, lookup: F) -> Result<MwsConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seller_id = self
            .seller_id
            .ok_or(ConfigError::MissingRequiredField { field: "seller_id" })?;

        let region = self
            .region
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let marketplace = Marketplace::from_region(&region)?;

        let credential = match (self.access_key, self.secret_key) {
            (Some(access_key), Some(secret_key)) => Credential::new(access_key, secret_key),
            _ => Credential::from_lookup(lookup)?,
        };

        Ok(MwsConfig {
            seller_id,
            auth_token: self.auth_token,
            marketplace,
            credential,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn keyed_builder() -> MwsConfigBuilder {
        MwsConfig::builder()
            .seller_id(SellerId::new("SellerID").unwrap())
            .access_key(AccessKeyId::new("AccessKey").unwrap())
            .secret_key(SecretKey::new("SecretKey").unwrap())
    }

    #[test]
    fn test_builder_requires_seller_id() {
        let result = MwsConfigBuilder::new()
            .access_key(AccessKeyId::new("AccessKey").unwrap())
            .secret_key(SecretKey::new("SecretKey").unwrap())
            .build_with_env(no_env);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "seller_id" })
        ));
    }

    #[test]
    fn test_region_defaults_to_us() {
        let config = keyed_builder().build_with_env(no_env).unwrap();
        assert_eq!(config.marketplace().region(), "US");
        assert_eq!(config.marketplace().id(), "ATVPDKIKX0DER");
        assert_eq!(config.marketplace().endpoint(), "mws.amazonservices.com");
    }

    #[test]
    fn test_empty_region_defaults_to_us() {
        let config = keyed_builder().region("").build_with_env(no_env).unwrap();
        assert_eq!(config.marketplace().region(), "US");
    }

    #[test]
    fn test_unknown_region_fails_build() {
        let result = keyed_builder().region("UnKnown").build_with_env(no_env);
        assert_eq!(result.unwrap_err().to_string(), "Invalid region: UnKnown");
    }

    #[test]
    fn test_missing_credentials_fails_build() {
        let result = MwsConfig::builder()
            .seller_id(SellerId::new("SellerID").unwrap())
            .build_with_env(no_env);
        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn test_partial_credentials_fall_back_to_env() {
        let config = MwsConfig::builder()
            .seller_id(SellerId::new("SellerID").unwrap())
            .access_key(AccessKeyId::new("Ignored").unwrap())
            .build_with_env(|name| match name {
                ACCESS_KEY_ENV => Some("EnvAccess".to_string()),
                SECRET_KEY_ENV => Some("EnvSecret".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.credential().access_key().as_ref(), "EnvAccess");
        assert_eq!(config.credential().secret_key().as_ref(), "EnvSecret");
    }

    #[test]
    fn test_empty_auth_token_is_absent() {
        let config = keyed_builder().auth_token("").build_with_env(no_env).unwrap();
        assert_eq!(config.auth_token(), None);

        let config = keyed_builder()
            .auth_token("AuthToken")
            .build_with_env(no_env)
            .unwrap();
        assert_eq!(config.auth_token(), Some("AuthToken"));
    }

    #[test]
    fn test_optional_settings_are_kept() {
        let config = keyed_builder()
            .region("UK")
            .api_host(HostUrl::new("http://localhost:9000").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build_with_env(no_env)
            .unwrap();

        assert_eq!(config.marketplace().id(), "A1F83G8C2ARO7P");
        assert_eq!(
            config.api_host().map(HostUrl::base_uri),
            Some("http://localhost:9000")
        );
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }
}
