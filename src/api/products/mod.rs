//! Products API section (2011-10-01).
//!
//! [`ProductsClient`] wraps a [`MwsClient`] and adds the configured
//! `MarketplaceId` to every operation except `GetServiceStatus`.

mod results;

use std::sync::Arc;

pub use results::{
    decode_matching_products, decode_product_results, reshape_matching_product, Identifiers,
    MarketplaceAsin, MatchingProductOperation, MatchingProductsResult, Product, ProductResult,
    SalesRank, SkuIdentifier,
};

use crate::api::optional_params;
use crate::clients::{Clock, HttpError, MwsClient, MwsResponse, Parameters};
use crate::config::{ApiSection, MwsConfig};

/// Client for the Products API section.
///
/// # Example
///
/// ```rust,ignore
/// use mws_api::api::products::{decode_matching_products, MatchingProductOperation};
/// use mws_api::api::ProductsClient;
///
/// let products = ProductsClient::new(&config);
/// let response = products.get_matching_product(&["B002KT3XRQ"]).await?;
///
/// let doc = response.error_for_status()?.document()?;
/// let results = decode_matching_products(MatchingProductOperation::GetMatchingProduct, &doc)?;
/// ```
#[derive(Debug)]
pub struct ProductsClient {
    http_client: MwsClient,
}

// Verify ProductsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProductsClient>();
};

impl ProductsClient {
    /// Creates a Products client.
    #[must_use]
    pub fn new(config: &MwsConfig) -> Self {
        Self {
            http_client: MwsClient::new(config, ApiSection::Products),
        }
    }

    /// Creates a Products client whose request timestamps come from `clock`.
    #[must_use]
    pub fn with_clock(config: &MwsConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            http_client: MwsClient::with_clock(config, ApiSection::Products, clock),
        }
    }

    /// Returns the underlying core client.
    #[must_use]
    pub const fn http_client(&self) -> &MwsClient {
        &self.http_client
    }

    fn params(&self, action: &str) -> Parameters {
        Parameters::new()
            .with("Action", action)
            .with("MarketplaceId", self.http_client.marketplace_id())
    }

    /// Returns the operational status of the Products API section.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_service_status(&self) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new().with("Action", "GetServiceStatus");
        self.http_client.send(&params).await
    }

    /// Returns products and their attributes matching a search query.
    ///
    /// Optional parameters: `QueryContextId`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn list_matching_products(
        &self,
        query: &str,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("ListMatchingProducts")
            .with("Query", query)
            .merge(optional_params(optional, &["QueryContextId"]));
        self.http_client.send(&params).await
    }

    /// Returns products and their attributes for a list of ASINs.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_matching_product(&self, asin_list: &[&str]) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetMatchingProduct")
            .with("ASINList", asin_list.to_vec())
            .structure("ASINList", &["ASIN"]);
        self.http_client.send(&params).await
    }

    /// Returns products and their attributes for a list of ASIN, GCID,
    /// `SellerSKU`, UPC, EAN, ISBN or JAN values.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_matching_product_for_id(
        &self,
        id_type: &str,
        id_list: &[&str],
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetMatchingProductForId")
            .with("IdType", id_type)
            .with("IdList", id_list.to_vec())
            .structure("IdList", &["Id"]);
        self.http_client.send(&params).await
    }

    /// Returns the current competitive price of products, by `SellerSKU`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_competitive_pricing_for_sku(
        &self,
        seller_sku_list: &[&str],
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetCompetitivePricingForSKU")
            .with("SellerSKUList", seller_sku_list.to_vec())
            .structure("SellerSKUList", &["SellerSKU"]);
        self.http_client.send(&params).await
    }

    /// Returns the current competitive price of products, by ASIN.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_competitive_pricing_for_asin(
        &self,
        asin_list: &[&str],
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetCompetitivePricingForASIN")
            .with("ASINList", asin_list.to_vec())
            .structure("ASINList", &["ASIN"]);
        self.http_client.send(&params).await
    }

    /// Returns the lowest-price active offer listings for up to 20 products,
    /// by `SellerSKU`.
    ///
    /// Optional parameters: `ItemCondition`, `ExcludeMe`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_lowest_offer_listings_for_sku(
        &self,
        seller_sku_list: &[&str],
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetLowestOfferListingsForSKU")
            .with("SellerSKUList", seller_sku_list.to_vec())
            .merge(optional_params(optional, &["ItemCondition", "ExcludeMe"]))
            .structure("SellerSKUList", &["SellerSKU"]);
        self.http_client.send(&params).await
    }

    /// Returns the lowest-price active offer listings for up to 20 products,
    /// by ASIN.
    ///
    /// Optional parameters: `ItemCondition`, `ExcludeMe`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_lowest_offer_listings_for_asin(
        &self,
        asin_list: &[&str],
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetLowestOfferListingsForASIN")
            .with("ASINList", asin_list.to_vec())
            .merge(optional_params(optional, &["ItemCondition", "ExcludeMe"]))
            .structure("ASINList", &["ASIN"]);
        self.http_client.send(&params).await
    }

    /// Returns the lowest priced offers for a single product, by `SellerSKU`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_lowest_priced_offers_for_sku(
        &self,
        seller_sku: &str,
        item_condition: &str,
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetLowestPricedOffersForSKU")
            .with("SellerSKU", seller_sku)
            .with("ItemCondition", item_condition);
        self.http_client.send(&params).await
    }

    /// Returns the lowest priced offers for a single product, by ASIN.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_lowest_priced_offers_for_asin(
        &self,
        asin: &str,
        item_condition: &str,
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetLowestPricedOffersForASIN")
            .with("ASIN", asin)
            .with("ItemCondition", item_condition);
        self.http_client.send(&params).await
    }

    /// Returns pricing for your own offer listings, by `SellerSKU`.
    ///
    /// Optional parameters: `ItemCondition`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_my_price_for_sku(
        &self,
        seller_sku_list: &[&str],
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetMyPriceForSKU")
            .with("SellerSKUList", seller_sku_list.to_vec())
            .merge(optional_params(optional, &["ItemCondition"]))
            .structure("SellerSKUList", &["SellerSKU"]);
        self.http_client.send(&params).await
    }

    /// Returns pricing for your own offer listings, by ASIN.
    ///
    /// Optional parameters: `ItemCondition`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_my_price_for_asin(
        &self,
        asin_list: &[&str],
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetMyPriceForASIN")
            .with("ASINList", asin_list.to_vec())
            .merge(optional_params(optional, &["ItemCondition"]))
            .structure("ASINList", &["ASIN"]);
        self.http_client.send(&params).await
    }

    /// Returns the parent categories of a product, by `SellerSKU`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_product_categories_for_sku(
        &self,
        seller_sku: &str,
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetProductCategoriesForSKU")
            .with("SellerSKU", seller_sku);
        self.http_client.send(&params).await
    }

    /// Returns the parent categories of a product, by ASIN.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_product_categories_for_asin(
        &self,
        asin: &str,
    ) -> Result<MwsResponse, HttpError> {
        let params = self
            .params("GetProductCategoriesForASIN")
            .with("ASIN", asin);
        self.http_client.send(&params).await
    }
}
