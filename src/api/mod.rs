//! API-section clients.
//!
//! Each client wraps a [`MwsClient`](crate::MwsClient) for its section and
//! exposes one async method per operation. Methods package the operation's
//! parameters, structure list-valued ones into indexed wire keys and return
//! the raw [`MwsResponse`](crate::MwsResponse); decoding the body is left to
//! the caller, with [`ServiceStatus`] and the Products results as typed
//! helpers.
//!
//! Optional parameters are passed as a [`Parameters`] bag. Keys the
//! operation does not accept are dropped, and keys are matched with their
//! first letter upper-cased (`maxCount` is sent as `MaxCount`).
//!
//! # Example
//!
//! ```rust,ignore
//! use mws_api::api::{ProductsClient, ReportsClient, ServiceStatus};
//! use mws_api::Parameters;
//!
//! let reports = ReportsClient::new(&config);
//! let filter = Parameters::new().with("ReportTypeList", vec!["_GET_FLAT_FILE_OPEN_LISTINGS_DATA_"]);
//! let response = reports.get_report_count(Some(&filter)).await?;
//!
//! let products = ProductsClient::new(&config);
//! let status = ServiceStatus::from_document(&products.get_service_status().await?.document()?)?;
//! ```

mod orders;
pub mod products;
mod reports;
mod service_status;

pub use orders::OrdersClient;
pub use products::ProductsClient;
pub use reports::ReportsClient;
pub use service_status::{ServiceStatus, StatusMessage};

use crate::clients::Parameters;

/// Returns the accepted subset of caller-supplied optional parameters.
pub(crate) fn optional_params(optional: Option<&Parameters>, accept_keys: &[&str]) -> Parameters {
    optional.map_or_else(Parameters::new, |params| params.select(accept_keys))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_params_filters_and_title_cases() {
        let optional = Parameters::new()
            .with("maxCount", 10)
            .with("Acknowledged", false)
            .with("Bogus", "x");

        let selected = optional_params(Some(&optional), &["MaxCount", "Acknowledged"]);

        assert_eq!(selected.len(), 2);
        assert!(selected.contains_key("MaxCount"));
        assert!(selected.contains_key("Acknowledged"));
        assert!(!selected.contains_key("Bogus"));
    }

    #[test]
    fn test_optional_params_none_is_empty() {
        assert!(optional_params(None, &["MaxCount"]).is_empty());
    }
}
