//! Schema-less XML response decoding.
//!
//! MWS answers every operation with an XML document whose shape depends on
//! the operation. Rather than a schema per response, this module decodes the
//! document into a generic tree ([`XmlDocument`]) and offers a navigator
//! ([`XmlNode`]) to search it by tag or path and coerce what it finds into
//! scalars or serde structs.
//!
//! # Conventions
//!
//! - attribute `Foo` is keyed `-Foo`
//! - text next to attributes or child elements is keyed `#text`
//! - repeated sibling tags become a list
//! - paths are dotted tag names from the document root
//!
//! # Example
//!
//! ```rust
//! use mws_api::xml::XmlDocument;
//!
//! let doc = XmlDocument::parse(br#"<GetReportCountResponse>
//!   <GetReportCountResult><Count>166</Count></GetReportCountResult>
//! </GetReportCountResponse>"#).unwrap();
//!
//! let count = doc.root().find_by_key("Count")[0].to_int().unwrap();
//! assert_eq!(count, 166);
//! ```

pub mod de;
mod document;
mod errors;
mod node;

pub use document::{XmlDocument, XmlValue, ATTRIBUTE_PREFIX, TEXT_KEY};
pub use errors::XmlError;
pub use node::XmlNode;
