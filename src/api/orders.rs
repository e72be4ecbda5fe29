//! Orders API section (2013-09-01).

use std::sync::Arc;

use crate::api::optional_params;
use crate::clients::{Clock, HttpError, MwsClient, MwsResponse, Parameters};
use crate::config::{ApiSection, MwsConfig};

const LIST_ORDERS_KEYS: &[&str] = &[
    "CreatedAfter",
    "CreatedBefore",
    "LastUpdatedAfter",
    "LastUpdatedBefore",
    "OrderStatus",
    "FulfillmentChannel",
    "PaymentMethod",
    "SellerOrderId",
    "BuyerEmail",
    "TFMShipmentStatus",
    "MaxResultsPerPage",
];

/// Client for the Orders API section.
///
/// `ListOrders` requires either `CreatedAfter` or `LastUpdatedAfter`; the
/// service rejects requests with both or neither.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{Duration, Utc};
/// use mws_api::api::OrdersClient;
/// use mws_api::Parameters;
///
/// let orders = OrdersClient::new(&config);
/// let filter = Parameters::new()
///     .with("CreatedAfter", Utc::now() - Duration::days(1))
///     .with("OrderStatus", vec!["Unshipped", "PartiallyShipped"]);
///
/// let response = orders.list_orders(Some(&filter)).await?;
/// ```
#[derive(Debug)]
pub struct OrdersClient {
    http_client: MwsClient,
}

// Verify OrdersClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrdersClient>();
};

impl OrdersClient {
    /// Creates an Orders client.
    #[must_use]
    pub fn new(config: &MwsConfig) -> Self {
        Self {
            http_client: MwsClient::new(config, ApiSection::Orders),
        }
    }

    /// Creates an Orders client whose request timestamps come from `clock`.
    #[must_use]
    pub fn with_clock(config: &MwsConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            http_client: MwsClient::with_clock(config, ApiSection::Orders, clock),
        }
    }

    /// Returns the underlying core client.
    #[must_use]
    pub const fn http_client(&self) -> &MwsClient {
        &self.http_client
    }

    /// Returns the operational status of the Orders API section.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_service_status(&self) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new().with("Action", "GetServiceStatus");
        self.http_client.send(&params).await
    }

    /// Returns orders created or updated during a time frame.
    ///
    /// Optional parameters: `CreatedAfter`, `CreatedBefore`,
    /// `LastUpdatedAfter`, `LastUpdatedBefore`, `OrderStatus` (list),
    /// `FulfillmentChannel` (list), `PaymentMethod` (list), `SellerOrderId`,
    /// `BuyerEmail`, `TFMShipmentStatus` (list), `MaxResultsPerPage`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn list_orders(&self, optional: Option<&Parameters>) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new()
            .with("Action", "ListOrders")
            .with("MarketplaceId", vec![self.http_client.marketplace_id()])
            .merge(optional_params(optional, LIST_ORDERS_KEYS))
            .structure("MarketplaceId", &["Id"])
            .structure("OrderStatus", &["Status"])
            .structure("FulfillmentChannel", &["Channel"])
            .structure("PaymentMethod", &["Method"])
            .structure("TFMShipmentStatus", &["Status"]);
        self.http_client.send(&params).await
    }

    /// Returns the next page of orders.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn list_orders_by_next_token(
        &self,
        next_token: &str,
    ) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new()
            .with("Action", "ListOrdersByNextToken")
            .with("NextToken", next_token);
        self.http_client.send(&params).await
    }

    /// Returns up to 50 orders by `AmazonOrderId`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_order(&self, amazon_order_ids: &[&str]) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new()
            .with("Action", "GetOrder")
            .with("AmazonOrderId", amazon_order_ids.to_vec())
            .structure("AmazonOrderId", &["Id"]);
        self.http_client.send(&params).await
    }

    /// Returns the items of one order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn list_order_items(&self, amazon_order_id: &str) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new()
            .with("Action", "ListOrderItems")
            .with("AmazonOrderId", amazon_order_id);
        self.http_client.send(&params).await
    }

    /// Returns the next page of order items.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn list_order_items_by_next_token(
        &self,
        next_token: &str,
    ) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new()
            .with("Action", "ListOrderItemsByNextToken")
            .with("NextToken", next_token);
        self.http_client.send(&params).await
    }
}
