//! Marketplace lookup table.
//!
//! Each MWS region maps to one marketplace id, and each marketplace id is
//! served by one regional endpoint host. European marketplaces share a host.

use crate::error::ConfigError;

/// Region code used when none is configured.
pub const DEFAULT_REGION: &str = "US";

/// `(region, marketplace id, endpoint host)` rows.
const MARKETPLACES: &[(&str, &str, &str)] = &[
    ("CA", "A2EUQ1WTGCTBG2", "mws.amazonservices.ca"),
    ("US", "ATVPDKIKX0DER", "mws.amazonservices.com"),
    ("DE", "A1PA6795UKMFR9", "mws-eu.amazonservices.com"),
    ("ES", "A1RKKUPIHCS9HS", "mws-eu.amazonservices.com"),
    ("FR", "A13V1IB3VIYZZH", "mws-eu.amazonservices.com"),
    ("IN", "A21TJRUUN4KGV", "mws.amazonservices.in"),
    ("IT", "APJ6JRA9NG5V4", "mws-eu.amazonservices.com"),
    ("UK", "A1F83G8C2ARO7P", "mws-eu.amazonservices.com"),
    ("JP", "A1VC38T7YXB528", "mws.amazonservices.jp"),
    ("CN", "AAHKV2X7AFYLW", "mws.amazonservices.com.cn"),
];

/// A resolved marketplace: region code, marketplace id and endpoint host.
///
/// # Example
///
/// ```rust
/// use mws_api::Marketplace;
///
/// let us = Marketplace::from_region("US").unwrap();
/// assert_eq!(us.id(), "ATVPDKIKX0DER");
/// assert_eq!(us.endpoint(), "mws.amazonservices.com");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marketplace {
    region: &'static str,
    id: &'static str,
    endpoint: &'static str,
}

impl Marketplace {
    /// Resolves a marketplace from its region code. Codes are case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegion`] for codes not in the table.
    pub fn from_region(region: &str) -> Result<Self, ConfigError> {
        MARKETPLACES
            .iter()
            .find(|(code, _, _)| *code == region)
            .map(|&(region, id, endpoint)| Self {
                region,
                id,
                endpoint,
            })
            .ok_or_else(|| ConfigError::InvalidRegion {
                region: region.to_string(),
            })
    }

    /// Resolves a marketplace from its marketplace id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMarketplaceId`] for ids not in the table.
    pub fn from_id(id: &str) -> Result<Self, ConfigError> {
        MARKETPLACES
            .iter()
            .find(|(_, marketplace_id, _)| *marketplace_id == id)
            .map(|&(region, id, endpoint)| Self {
                region,
                id,
                endpoint,
            })
            .ok_or_else(|| ConfigError::InvalidMarketplaceId { id: id.to_string() })
    }

    /// Returns every known marketplace, in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        MARKETPLACES.iter().map(|&(region, id, endpoint)| Self {
            region,
            id,
            endpoint,
        })
    }

    /// Returns the region code (e.g., "US").
    #[must_use]
    pub const fn region(&self) -> &'static str {
        self.region
    }

    /// Returns the marketplace id (e.g., "ATVPDKIKX0DER").
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the endpoint host (e.g., "mws.amazonservices.com").
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// Returns the character encoding expected for uploaded feed files.
    #[must_use]
    pub fn encoding(&self) -> &'static str {
        if self.region == "CN" {
            "UTF-16"
        } else {
            "ISO-8859-1"
        }
    }
}
