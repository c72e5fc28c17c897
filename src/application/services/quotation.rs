//! # Quotation Orchestrator
//!
//! Composes service resolution, fee quoting, and best-effort currency
//! conversion into one simplified quote.
//!
//! The pipeline is strictly sequential and single-pass: resolve service,
//! fetch fee, fetch rate, convert, return. No step is retried and no step
//! runs concurrently with another. The rate fetch is the only soft-failure
//! point; everything else aborts the operation.

use crate::application::error::{QuotationError, QuotationResult};
use crate::domain::value_objects::{
    select_service, DistrictId, FeeBreakdown, ServiceDescriptor, ShipmentOverrides, ShipmentSpec,
    WardCode,
};
use crate::infrastructure::logistics::traits::{FeeRequest, LogisticsProvider};
use crate::infrastructure::rates::traits::RateSource;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// The normalized, optionally currency-converted fee response.
///
/// `code` and `message` come from the fee quote unchanged. `usd_rate` is
/// the rate actually used for conversion, 0 when none was available, so a
/// caller can detect the degraded case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplifiedQuote {
    /// Provider status code, passed through unchanged.
    pub code: Value,
    /// Provider status message, passed through unchanged.
    pub message: Value,
    /// The conversion rate applied, 0 if conversion was skipped.
    #[serde(rename = "usdRate")]
    pub usd_rate: f64,
    /// The fee breakdown, converted when a usable rate was obtained.
    pub data: FeeBreakdown,
}

/// Orchestrates the shipping-fee quotation pipeline.
#[derive(Debug, Clone)]
pub struct QuotationService {
    logistics: Arc<dyn LogisticsProvider>,
    rates: Arc<dyn RateSource>,
}

impl QuotationService {
    /// Creates a new quotation service.
    #[must_use]
    pub fn new(logistics: Arc<dyn LogisticsProvider>, rates: Arc<dyn RateSource>) -> Self {
        Self { logistics, rates }
    }

    /// Resolves the shipping service to use for a route.
    ///
    /// Asks the provider which services are offered between the two
    /// districts and applies the deterministic selection policy.
    ///
    /// # Errors
    ///
    /// - [`QuotationError::NoServiceAvailable`] when the provider returns
    ///   no services for the route
    /// - [`QuotationError::Provider`] when the lookup itself fails
    pub async fn resolve_service(
        &self,
        from_district: DistrictId,
        to_district: DistrictId,
    ) -> QuotationResult<ServiceDescriptor> {
        let list = self
            .logistics
            .available_services(from_district, to_district)
            .await?;

        select_service(list.services())
            .cloned()
            .ok_or(QuotationError::NoServiceAvailable)
    }

    /// Produces a simplified quote for a route and shipment.
    ///
    /// Executes, strictly in order: merge overrides onto defaults, resolve
    /// the service, fetch the fee, attempt the rate exactly once, convert
    /// the two monetary fields when a usable rate was obtained.
    ///
    /// # Errors
    ///
    /// - [`QuotationError::NoServiceAvailable`] aborts before any fee call
    /// - [`QuotationError::Provider`] propagates fee/lookup failures with
    ///   the provider's error body when present
    ///
    /// A rate-source failure is not an error: the response carries the
    /// native-currency values and reports a rate of 0.
    pub async fn simplified_quote(
        &self,
        from_district: DistrictId,
        to_district: DistrictId,
        to_ward: WardCode,
        overrides: ShipmentOverrides,
    ) -> QuotationResult<SimplifiedQuote> {
        let shipment = ShipmentSpec::from_overrides(overrides);

        let service = self.resolve_service(from_district, to_district).await?;
        tracing::debug!(service_id = %service.service_id, "resolved shipping service");

        let request = FeeRequest::new(
            service.service_id,
            from_district,
            to_district,
            to_ward,
            shipment,
        );
        let quote = self.logistics.calculate_fee(&request).await?;

        // Soft failure: degrade to "no conversion", never abort.
        let rate = match self.rates.fetch_rate().await {
            Ok(rate) => Some(rate),
            Err(e) => {
                tracing::warn!(error = %e, "proceeding without currency conversion");
                None
            }
        };

        let mut data = quote.data.unwrap_or_default();
        let usd_rate = match &rate {
            Some(rate) => {
                data.convert_monetary_fields(rate.get());
                rate.get()
            }
            None => 0.0,
        };

        Ok(SimplifiedQuote {
            code: quote.code,
            message: quote.message,
            usd_rate,
            data,
        })
    }
}
