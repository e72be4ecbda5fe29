//! Typed results for the Products operations that return product records.
//!
//! `ListMatchingProducts` and `GetMatchingProductForId` wrap their products
//! in a `Products` element under each result tag. `GetMatchingProduct`
//! instead puts a single `Product` directly under the result tag.
//! [`reshape_matching_product`] converts that shape into the common
//! [`MatchingProductsResult`] list, and [`decode_matching_products`] applies
//! it for that operation only.

use serde::Deserialize;

use crate::clients::ApiError;
use crate::xml::de::{from_text, wrapped_list};
use crate::xml::{XmlDocument, XmlError, XmlNode};

/// A product record: identifiers, attributes, relationships and rankings.
///
/// Attribute sets and relationships vary per product category and are kept
/// as JSON trees in the `-Attr` / `#text` convention.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "Identifiers", default)]
    pub identifiers: Identifiers,
    #[serde(rename = "AttributeSets", default)]
    pub attribute_sets: serde_json::Value,
    #[serde(rename = "Relationships", default)]
    pub relationships: serde_json::Value,
    #[serde(rename = "CompetitivePricing", default)]
    pub competitive_pricing: serde_json::Value,
    #[serde(rename = "SalesRankings", default, deserialize_with = "wrapped_list")]
    pub sales_rankings: Vec<SalesRank>,
    #[serde(rename = "LowestOfferListings", default)]
    pub lowest_offer_listings: serde_json::Value,
    #[serde(rename = "Offers", default)]
    pub offers: serde_json::Value,
}

/// Identifiers of a product.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Identifiers {
    #[serde(rename = "MarketplaceASIN", default)]
    pub marketplace_asin: Option<MarketplaceAsin>,
    #[serde(rename = "SKUIdentifier", default)]
    pub sku_identifier: Option<SkuIdentifier>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct MarketplaceAsin {
    #[serde(rename = "MarketplaceId", default)]
    pub marketplace_id: String,
    #[serde(rename = "ASIN", default)]
    pub asin: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SkuIdentifier {
    #[serde(rename = "MarketplaceId", default)]
    pub marketplace_id: String,
    #[serde(rename = "SellerId", default)]
    pub seller_id: String,
    #[serde(rename = "SellerSKU", default)]
    pub seller_sku: String,
}

/// Sales rank of a product in one category.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SalesRank {
    #[serde(rename = "ProductCategoryId")]
    pub product_category_id: String,
    #[serde(rename = "Rank", deserialize_with = "from_text")]
    pub rank: i64,
}

/// One result of a matching-product operation, holding zero or more products.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MatchingProductsResult {
    /// The requested id (`GetMatchingProductForId`).
    #[serde(rename = "-Id", default)]
    pub id: String,
    /// The requested id type (`GetMatchingProductForId`).
    #[serde(rename = "-IdType", default)]
    pub id_type: String,
    /// The requested ASIN (`GetMatchingProduct`).
    #[serde(rename = "-ASIN", default)]
    pub asin: String,
    /// `Success` or `ClientError`; empty for `ListMatchingProducts`.
    #[serde(rename = "-status", default)]
    pub status: String,
    #[serde(rename = "Products", default, deserialize_with = "wrapped_list")]
    pub products: Vec<Product>,
    #[serde(rename = "Error", default)]
    pub error: Option<ApiError>,
}

/// One result holding at most one product.
///
/// This is the shape of `GetMatchingProduct` and of the pricing operations.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ProductResult {
    #[serde(rename = "-ASIN", default)]
    pub asin: String,
    #[serde(rename = "-SellerSKU", default)]
    pub seller_sku: String,
    #[serde(rename = "-status", default)]
    pub status: String,
    #[serde(rename = "Product", default)]
    pub product: Option<Product>,
    #[serde(rename = "Error", default)]
    pub error: Option<ApiError>,
}

/// The Products operations whose results decode as [`MatchingProductsResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchingProductOperation {
    ListMatchingProducts,
    GetMatchingProduct,
    GetMatchingProductForId,
}

impl MatchingProductOperation {
    /// The `Action` name.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::ListMatchingProducts => "ListMatchingProducts",
            Self::GetMatchingProduct => "GetMatchingProduct",
            Self::GetMatchingProductForId => "GetMatchingProductForId",
        }
    }

    /// The tag of each result element in the response.
    #[must_use]
    pub const fn result_tag(self) -> &'static str {
        match self {
            Self::ListMatchingProducts => "ListMatchingProductsResult",
            Self::GetMatchingProduct => "GetMatchingProductResult",
            Self::GetMatchingProductForId => "GetMatchingProductForIdResult",
        }
    }
}

/// Converts `GetMatchingProduct` results into the list shape of its siblings:
/// each result's product becomes a one-element `products` list.
#[must_use]
pub fn reshape_matching_product(results: Vec<ProductResult>) -> Vec<MatchingProductsResult> {
    results
        .into_iter()
        .map(|result| MatchingProductsResult {
            asin: result.asin,
            status: result.status,
            products: result.product.into_iter().collect(),
            error: result.error,
            ..MatchingProductsResult::default()
        })
        .collect()
}

/// Decodes the results of a matching-product response.
///
/// # Errors
///
/// Returns the decode error of the first result that does not fit.
pub fn decode_matching_products(
    operation: MatchingProductOperation,
    doc: &XmlDocument,
) -> Result<Vec<MatchingProductsResult>, XmlError> {
    let nodes = doc.root().find_by_key(operation.result_tag());

    match operation {
        MatchingProductOperation::GetMatchingProduct => {
            let results = decode_all::<ProductResult>(&nodes)?;
            Ok(reshape_matching_product(results))
        }
        MatchingProductOperation::ListMatchingProducts
        | MatchingProductOperation::GetMatchingProductForId => decode_all(&nodes),
    }
}

/// Decodes every `result_tag` element as a [`ProductResult`], e.g.
/// `GetMyPriceForASINResult` or `GetCompetitivePricingForSKUResult`.
///
/// # Errors
///
/// Returns the decode error of the first result that does not fit.
pub fn decode_product_results(
    doc: &XmlDocument,
    result_tag: &str,
) -> Result<Vec<ProductResult>, XmlError> {
    decode_all(&doc.root().find_by_key(result_tag))
}

fn decode_all<T: serde::de::DeserializeOwned>(nodes: &[XmlNode<'_>]) -> Result<Vec<T>, XmlError> {
    nodes.iter().map(XmlNode::to_struct::<T>).collect()
}
