//! Error types for MWS client configuration.
//!
//! This module contains the error returned while assembling a client
//! identity: seller id, credentials, and marketplace region.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! client is never partially constructed. Error messages are designed to be
//! clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use mws_api::{ConfigError, SellerId};
//!
//! let result = SellerId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySellerId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring an MWS client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Seller id cannot be empty.
    #[error("No seller id provided. Please provide the merchant id of your seller account.")]
    EmptySellerId,

    /// Access key id cannot be empty.
    #[error("AWS access key id cannot be empty.")]
    EmptyAccessKey,

    /// Secret key cannot be empty.
    #[error("AWS secret key cannot be empty.")]
    EmptySecretKey,

    /// Neither the builder nor the environment yielded both credential keys.
    #[error("Can't find MWS credential information. Set the access and secret keys or the AWS_ACCESS_KEY and AWS_SECRET_KEY environment variables.")]
    MissingCredentials,

    /// The region code is not in the marketplace table.
    #[error("Invalid region: {region}")]
    InvalidRegion {
        /// The region code that was provided.
        region: String,
    },

    /// The marketplace id is not in the marketplace table.
    #[error("Invalid marketplace id: {id}")]
    InvalidMarketplaceId {
        /// The marketplace id that was provided.
        id: String,
    },

    /// The API section name is not known.
    #[error("Invalid API section '{name}'. Expected one of 'Products', 'Orders' or 'Reports'.")]
    InvalidApiSection {
        /// The section name that was provided.
        name: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://localhost:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_region_error_message() {
        let error = ConfigError::InvalidRegion {
            region: "UnKnown".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid region: UnKnown");
    }

    #[test]
    fn test_invalid_marketplace_id_error_message() {
        let error = ConfigError::InvalidMarketplaceId {
            id: "XYZ".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid marketplace id: XYZ");
    }

    #[test]
    fn test_missing_credentials_error_message() {
        let message = ConfigError::MissingCredentials.to_string();
        assert!(message.starts_with("Can't find MWS credential information"));
        assert!(message.contains("AWS_ACCESS_KEY"));
        assert!(message.contains("AWS_SECRET_KEY"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "seller_id" };
        let message = error.to_string();
        assert!(message.contains("seller_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptySellerId;
        let _: &dyn std::error::Error = &error;
    }
}
