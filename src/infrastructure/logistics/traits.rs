//! # Logistics Provider Port
//!
//! Port definition for the logistics provider integration.
//!
//! This module defines the [`LogisticsProvider`] trait consumed by the
//! quotation pipeline and the REST handlers. Three capabilities matter to
//! the core: listing services for a route, computing a fee, and the
//! master-data lookups (provinces, districts, wards) used by the storefront.
//!
//! # Error Handling
//!
//! Methods return `ProviderResult<T>`. Implementations map transport and
//! status failures to [`ProviderError`](crate::infrastructure::logistics::error::ProviderError)
//! variants; provider-declared error codes inside successful envelopes are
//! never reinterpreted.

use crate::domain::value_objects::{
    DistrictId, FeeQuote, ProvinceId, ServiceDescriptor, ServiceId, ShipmentSpec, WardCode,
};
use crate::infrastructure::logistics::error::ProviderResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The provider's response envelope for the available-services capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceList {
    /// Provider status code, passed through unchanged.
    #[serde(default)]
    pub code: Value,
    /// Provider status message, passed through unchanged.
    #[serde(default)]
    pub message: Value,
    /// The services offered on the route, absent when none exist.
    #[serde(default)]
    pub data: Option<Vec<ServiceDescriptor>>,
    /// Remaining top-level provider fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceList {
    /// Returns the services as a slice, treating an absent list as empty.
    #[must_use]
    pub fn services(&self) -> &[ServiceDescriptor] {
        self.data.as_deref().unwrap_or_default()
    }
}

/// A complete fee-calculation request for the provider.
///
/// Built by the orchestrator from a resolved service and a merged
/// [`ShipmentSpec`]; the raw fee endpoint deserializes it straight from the
/// caller's body, in which case unknown fields are forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRequest {
    /// The resolved shipping service.
    pub service_id: ServiceId,
    /// Origin district.
    pub from_district_id: DistrictId,
    /// Destination district.
    pub to_district_id: DistrictId,
    /// Destination ward code.
    pub to_ward_code: WardCode,
    /// Package height.
    pub height: u32,
    /// Package length.
    pub length: u32,
    /// Package width.
    pub width: u32,
    /// Package weight.
    pub weight: u32,
    /// Declared insurance value in the provider's native currency.
    pub insurance_value: u64,
    /// Coupon code, serialized as null when absent.
    pub coupon: Option<String>,
    /// Additional provider parameters, forwarded untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeeRequest {
    /// Builds a fee request from a resolved service, route, and shipment.
    #[must_use]
    pub fn new(
        service_id: ServiceId,
        from_district_id: DistrictId,
        to_district_id: DistrictId,
        to_ward_code: WardCode,
        shipment: ShipmentSpec,
    ) -> Self {
        Self {
            service_id,
            from_district_id,
            to_district_id,
            to_ward_code,
            height: shipment.height,
            length: shipment.length,
            width: shipment.width,
            weight: shipment.weight,
            insurance_value: shipment.insurance_value,
            coupon: shipment.coupon,
            extra: Map::new(),
        }
    }
}

/// Trait defining the interface to the logistics provider.
///
/// The quotation pipeline and REST handlers depend on this trait rather
/// than a concrete client, so tests can substitute deterministic mocks.
#[async_trait]
pub trait LogisticsProvider: Send + Sync + fmt::Debug {
    /// Lists provinces from the provider's master data.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` on transport failure or rejection.
    async fn provinces(&self) -> ProviderResult<Value>;

    /// Lists districts of a province from the provider's master data.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` on transport failure or rejection.
    async fn districts(&self, province_id: ProvinceId) -> ProviderResult<Value>;

    /// Lists wards of a district from the provider's master data.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` on transport failure or rejection.
    async fn wards(&self, district_id: DistrictId) -> ProviderResult<Value>;

    /// Lists the shipping services offered between two districts, scoped to
    /// the configured shop account.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` on transport failure or rejection.
    async fn available_services(
        &self,
        from_district: DistrictId,
        to_district: DistrictId,
    ) -> ProviderResult<ServiceList>;

    /// Computes the shipping fee for a fully specified request.
    ///
    /// The response envelope is returned unmodified; provider error codes
    /// inside a successful envelope are surfaced as-is.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` on transport failure or rejection, carrying
    /// the provider's error body when one was present.
    async fn calculate_fee(&self, request: &FeeRequest) -> ProviderResult<FeeQuote>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_list_treats_absent_data_as_empty() {
        let list: ServiceList =
            serde_json::from_value(json!({"code": 200, "message": "Success"})).unwrap();
        assert!(list.services().is_empty());
    }

    #[test]
    fn unknown_envelope_fields_are_forwarded() {
        let list: ServiceList = serde_json::from_value(json!({
            "code": 200,
            "message": "Success",
            "data": [],
            "code_message_value": "OK"
        }))
        .unwrap();

        let body = serde_json::to_value(&list).unwrap();
        assert_eq!(body["code_message_value"], json!("OK"));
    }

    #[test]
    fn fee_request_carries_the_merged_shipment() {
        let shipment = ShipmentSpec {
            height: 30,
            length: 15,
            width: 15,
            weight: 2000,
            insurance_value: 1_000_000,
            coupon: Some("SALE".to_string()),
        };
        let request = FeeRequest::new(
            ServiceId::new(53320),
            DistrictId::new(1442),
            DistrictId::new(1820),
            WardCode::new("030712"),
            shipment,
        );

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["service_id"], json!(53320));
        assert_eq!(body["weight"], json!(2000));
        assert_eq!(body["coupon"], json!("SALE"));
        assert_eq!(body["to_ward_code"], json!("030712"));
    }

    #[test]
    fn unknown_caller_fields_are_forwarded() {
        let request: FeeRequest = serde_json::from_value(json!({
            "service_id": 53320,
            "from_district_id": 1442,
            "to_district_id": 1820,
            "to_ward_code": "030712",
            "height": 15,
            "length": 15,
            "width": 15,
            "weight": 1000,
            "insurance_value": 500000,
            "coupon": null,
            "service_type_id": 2
        }))
        .unwrap();

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["service_type_id"], json!(2));
    }
}
