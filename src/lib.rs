//! # MWS API Rust Client
//!
//! A Rust client for the Amazon Marketplace Web Service (MWS), providing
//! type-safe configuration, Signature Version 2 request signing, and
//! schema-less navigation of the XML documents the service returns.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MwsConfig`] and [`MwsConfigBuilder`]
//! - Validated newtypes for seller and credential values
//! - Region to marketplace resolution via [`Marketplace`]
//! - A parameter bag ([`Parameters`]) with the structuring transform that
//!   flattens lists and nested bags into indexed wire keys
//! - Deterministic normalization, encoding and `HmacSHA256` signing
//! - An async core client ([`MwsClient`]) that signs and sends requests
//! - A response envelope ([`MwsResponse`]) that classifies protocol errors
//! - An XML navigator ([`xml::XmlNode`]) with key and path search, scalar
//!   coercions and serde decoding
//! - Products, Orders and Reports section clients in [`api`]
//!
//! ## Quick Start
//!
//! ```rust
//! use mws_api::{MwsConfig, SellerId, AccessKeyId, SecretKey};
//!
//! let config = MwsConfig::builder()
//!     .seller_id(SellerId::new("SellerID").unwrap())
//!     .auth_token("AuthToken")
//!     .region("UK")
//!     .access_key(AccessKeyId::new("AccessKey").unwrap())
//!     .secret_key(SecretKey::new("SecretKey").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.marketplace().id(), "A1F83G8C2ARO7P");
//! assert_eq!(config.marketplace().endpoint(), "mws-eu.amazonservices.com");
//! ```
//!
//! When the access key or secret key is not given, both are read from the
//! `AWS_ACCESS_KEY` and `AWS_SECRET_KEY` environment variables.
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use mws_api::api::ProductsClient;
//! use mws_api::api::products::{decode_matching_products, MatchingProductOperation};
//!
//! let products = ProductsClient::new(&config);
//! let response = products.get_matching_product(&["B002KT3XRQ"]).await?;
//!
//! if let Some(error) = &response.error {
//!     eprintln!("{}", error.message);
//! }
//!
//! let doc = response.document()?;
//! let results = decode_matching_products(MatchingProductOperation::GetMatchingProduct, &doc)?;
//! ```
//!
//! ## Building Requests Without Sending
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use mws_api::{ApiSection, MwsClient, MwsConfig, Parameters, SellerId, AccessKeyId, SecretKey};
//! use mws_api::clients::FixedClock;
//!
//! let config = MwsConfig::builder()
//!     .seller_id(SellerId::new("SellerID").unwrap())
//!     .auth_token("AuthToken")
//!     .access_key(AccessKeyId::new("AccessKey").unwrap())
//!     .secret_key(SecretKey::new("SecretKey").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2015, 10, 20, 22, 46, 7).unwrap());
//! let client = MwsClient::with_clock(&config, ApiSection::Products, Arc::new(clock));
//!
//! let params = Parameters::new()
//!     .with("Action", "GetMyPriceForASIN")
//!     .with("MarketplaceId", "Marketplace")
//!     .with("ASINList", vec!["ASIN"])
//!     .structure("ASINList", &["ASIN"]);
//!
//! let request = client.build_request(&params).unwrap();
//! assert_eq!(request.signature(), Some("MSwoBGqrM1h7IqQ8QIZo3sNvCKuV3zvTUKO/FAAWNt0="));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and clock are passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction and
//!   unstructured parameters fail before any I/O
//! - **Thread-safe**: Clients and configuration are `Send + Sync`
//! - **Async-first**: Requests are sent through `reqwest`

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod xml;

// Re-export public types at crate root for convenience
pub use config::{
    AccessKeyId, ApiSection, Credential, HostUrl, Marketplace, MwsConfig, MwsConfigBuilder,
    SecretKey, SellerId,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiError, HttpError, HttpMethod, MwsClient, MwsResponse, ParamValue, ParameterError,
    Parameters, QueryParams, QuotaInfo, ResponseError, SignedRequest,
};
