//! Validated newtype wrappers for client identity values.
//!
//! These wrappers reject empty values on construction so that a built
//! [`MwsConfig`](crate::MwsConfig) always carries a usable identity.

use crate::error::ConfigError;
use std::fmt;

/// A validated seller (merchant) id.
///
/// Sent as the `SellerId` parameter on every request.
///
/// # Example
///
/// ```rust
/// use mws_api::SellerId;
///
/// let seller = SellerId::new("A1B2C3D4E5").unwrap();
/// assert_eq!(seller.as_ref(), "A1B2C3D4E5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SellerId(String);

impl SellerId {
    /// Creates a new validated seller id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySellerId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptySellerId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for SellerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated AWS access key id.
///
/// Sent in clear as the `AWSAccessKeyId` parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessKeyId(String);

impl AccessKeyId {
    /// Creates a new validated access key id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyAccessKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for AccessKeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated AWS secret key used to sign requests.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SecretKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use mws_api::SecretKey;
///
/// let secret = SecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}

/// A validated base URL used in place of the marketplace endpoint.
///
/// Requests are dispatched to this URL (a proxy, or a mock server in tests)
/// while the signature is still computed over the marketplace host.
///
/// # Example
///
/// ```rust
/// use mws_api::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "127.0.0.1");
/// assert_eq!(url.base_uri(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL, without port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Returns the URL without a trailing slash, ready to prefix a request path.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_id_rejects_empty_string() {
        assert!(matches!(SellerId::new(""), Err(ConfigError::EmptySellerId)));
        assert!(matches!(SellerId::new("  "), Err(ConfigError::EmptySellerId)));
    }

    #[test]
    fn test_access_key_rejects_empty_string() {
        assert!(matches!(
            AccessKeyId::new(""),
            Err(ConfigError::EmptyAccessKey)
        ));
    }

    #[test]
    fn test_secret_key_rejects_empty_string() {
        assert!(matches!(SecretKey::new(""), Err(ConfigError::EmptySecretKey)));
    }

    #[test]
    fn test_secret_key_debug_is_masked() {
        let secret = SecretKey::new("super-secret").unwrap();
        let debug = format!("{secret:?}");
        assert_eq!(debug, "SecretKey(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_host_url_parses_scheme_host_and_port() {
        let url = HostUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
        assert_eq!(url.base_uri(), "http://localhost:3000");
    }

    #[test]
    fn test_host_url_rejects_missing_scheme() {
        assert!(matches!(
            HostUrl::new("localhost:3000"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
    }

    #[test]
    fn test_host_url_rejects_missing_host() {
        assert!(matches!(
            HostUrl::new("https://"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
        assert!(matches!(
            HostUrl::new("https:///path"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
    }
}
