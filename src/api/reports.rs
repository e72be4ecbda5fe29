//! Reports API section (2009-01-01).
//!
//! Report bodies are returned as-is; `GetReport` answers with the report
//! file rather than an XML document, so use
//! [`MwsResponse::body`] or [`MwsResponse::write_body_to`] to read it.

use std::sync::Arc;

use crate::api::optional_params;
use crate::clients::{Clock, HttpError, MwsClient, MwsResponse, Parameters};
use crate::config::{ApiSection, MwsConfig};

/// Client for the Reports API section.
#[derive(Debug)]
pub struct ReportsClient {
    http_client: MwsClient,
}

// Verify ReportsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReportsClient>();
};

impl ReportsClient {
    /// Creates a Reports client.
    #[must_use]
    pub fn new(config: &MwsConfig) -> Self {
        Self {
            http_client: MwsClient::new(config, ApiSection::Reports),
        }
    }

    /// Creates a Reports client whose request timestamps come from `clock`.
    #[must_use]
    pub fn with_clock(config: &MwsConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            http_client: MwsClient::with_clock(config, ApiSection::Reports, clock),
        }
    }

    /// Returns the underlying core client.
    #[must_use]
    pub const fn http_client(&self) -> &MwsClient {
        &self.http_client
    }

    async fn send(&self, action: &str, params: Parameters) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new().with("Action", action).merge(params);
        self.http_client.send(&params).await
    }

    /// Creates a report request.
    ///
    /// Optional parameters: `StartDate`, `EndDate`, `ReportOptions`,
    /// `MarketplaceIdList` (list).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn request_report(
        &self,
        report_type: &str,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new()
            .with("ReportType", report_type)
            .merge(optional_params(
                optional,
                &["StartDate", "EndDate", "ReportOptions", "MarketplaceIdList"],
            ))
            .structure("MarketplaceIdList", &["Id"]);
        self.send("RequestReport", params).await
    }

    /// Returns report requests, e.g. to find a `ReportRequestId`.
    ///
    /// Optional parameters: `ReportRequestIdList` (list), `ReportTypeList`
    /// (list), `ReportProcessingStatusList` (list), `MaxCount`,
    /// `RequestedFromDate`, `RequestedToDate`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_report_request_list(
        &self,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = optional_params(
            optional,
            &[
                "ReportRequestIdList",
                "ReportTypeList",
                "ReportProcessingStatusList",
                "MaxCount",
                "RequestedFromDate",
                "RequestedToDate",
            ],
        )
        .structure("ReportRequestIdList", &["Id"])
        .structure("ReportTypeList", &["Type"])
        .structure("ReportProcessingStatusList", &["Status"]);
        self.send("GetReportRequestList", params).await
    }

    /// Returns the next page of report requests.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_report_request_list_by_next_token(
        &self,
        next_token: &str,
    ) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new().with("NextToken", next_token);
        self.send("GetReportRequestListByNextToken", params).await
    }

    /// Returns the number of submitted report requests.
    ///
    /// Optional parameters: `ReportTypeList` (list),
    /// `ReportProcessingStatusList` (list), `RequestedFromDate`,
    /// `RequestedToDate`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_report_request_count(
        &self,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = optional_params(
            optional,
            &[
                "ReportTypeList",
                "ReportProcessingStatusList",
                "RequestedFromDate",
                "RequestedToDate",
            ],
        )
        .structure("ReportTypeList", &["Type"])
        .structure("ReportProcessingStatusList", &["Status"]);
        self.send("GetReportRequestCount", params).await
    }

    /// Cancels report requests.
    ///
    /// Optional parameters: `ReportRequestIdList` (list), `ReportTypeList`
    /// (list), `ReportProcessingStatusList` (list), `RequestedFromDate`,
    /// `RequestedToDate`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn cancel_report_requests(
        &self,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = optional_params(
            optional,
            &[
                "ReportRequestIdList",
                "ReportTypeList",
                "ReportProcessingStatusList",
                "RequestedFromDate",
                "RequestedToDate",
            ],
        )
        .structure("ReportRequestIdList", &["Id"])
        .structure("ReportTypeList", &["Type"])
        .structure("ReportProcessingStatusList", &["Status"]);
        self.send("CancelReportRequests", params).await
    }

    /// Returns reports created in the previous 90 days.
    ///
    /// Optional parameters: `MaxCount`, `ReportTypeList` (list),
    /// `Acknowledged`, `AvailableFromDate`, `AvailableToDate`,
    /// `ReportRequestIdList` (list).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_report_list(
        &self,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = optional_params(
            optional,
            &[
                "MaxCount",
                "ReportTypeList",
                "Acknowledged",
                "AvailableFromDate",
                "AvailableToDate",
                "ReportRequestIdList",
            ],
        )
        .structure("ReportRequestIdList", &["Id"])
        .structure("ReportTypeList", &["Type"]);
        self.send("GetReportList", params).await
    }

    /// Returns the next page of reports.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_report_list_by_next_token(
        &self,
        next_token: &str,
    ) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new().with("NextToken", next_token);
        self.send("GetReportListByNextToken", params).await
    }

    /// Returns the number of `_DONE_` reports available for download.
    ///
    /// Optional parameters: `ReportTypeList` (list), `Acknowledged`,
    /// `AvailableFromDate`, `AvailableToDate`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_report_count(
        &self,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = optional_params(
            optional,
            &[
                "ReportTypeList",
                "Acknowledged",
                "AvailableFromDate",
                "AvailableToDate",
            ],
        )
        .structure("ReportTypeList", &["Type"]);
        self.send("GetReportCount", params).await
    }

    /// Returns the contents of a report.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be sent.
    pub async fn get_report(&self, report_id: &str) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new().with("ReportId", report_id);
        self.send("GetReport", params).await
    }

    /// Creates, updates or deletes the request schedule of a report type.
    ///
    /// `schedule` is one of `_15_MINUTES_` ... `_30_DAYS_` or `_NEVER_`.
    /// Optional parameters: `ScheduleDate`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn manage_report_schedule(
        &self,
        report_type: &str,
        schedule: &str,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new()
            .with("ReportType", report_type)
            .with("Schedule", schedule)
            .merge(optional_params(optional, &["ScheduleDate"]));
        self.send("ManageReportSchedule", params).await
    }

    /// Returns scheduled report requests.
    ///
    /// Optional parameters: `ReportTypeList` (list).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_report_schedule_list(
        &self,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = optional_params(optional, &["ReportTypeList"])
            .structure("ReportTypeList", &["Type"]);
        self.send("GetReportScheduleList", params).await
    }

    /// Returns the number of scheduled report requests.
    ///
    /// Optional parameters: `ReportTypeList` (list).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn get_report_schedule_count(
        &self,
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = optional_params(optional, &["ReportTypeList"])
            .structure("ReportTypeList", &["Type"]);
        self.send("GetReportScheduleCount", params).await
    }

    /// Updates the acknowledged status of reports.
    ///
    /// Optional parameters: `Acknowledged`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built or sent.
    pub async fn update_report_acknowledgements(
        &self,
        report_ids: &[&str],
        optional: Option<&Parameters>,
    ) -> Result<MwsResponse, HttpError> {
        let params = Parameters::new()
            .with("ReportIdList", report_ids.to_vec())
            .merge(optional_params(optional, &["Acknowledged"]))
            .structure("ReportIdList", &["Id"]);
        self.send("UpdateReportAcknowledgements", params).await
    }
}
