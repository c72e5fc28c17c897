//! # GHN Adapter
//!
//! [`LogisticsProvider`] implementation for a GHN-style shipping gateway.
//!
//! Authentication is a static token header; the fee capability additionally
//! requires the shop account in a header, while available-services takes it
//! in the request body. Both quirks are the provider's, not ours.

use crate::domain::value_objects::{DistrictId, FeeQuote, ProvinceId, ShopId};
use crate::infrastructure::logistics::error::{ProviderError, ProviderResult};
use crate::infrastructure::logistics::http_client::HttpClient;
use crate::infrastructure::logistics::traits::{FeeRequest, LogisticsProvider, ServiceList};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;

/// Client for the GHN-style logistics gateway.
#[derive(Debug, Clone)]
pub struct GhnClient {
    http: HttpClient,
    base_url: String,
    shop_id: ShopId,
}

#[derive(Debug, Serialize)]
struct AvailableServicesBody {
    shop_id: i64,
    from_district: i64,
    to_district: i64,
}

impl GhnClient {
    /// Creates a new GHN client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Gateway base URL, without a trailing slash.
    /// * `token` - Static API token sent with every request.
    /// * `shop_id` - Shop account the service and fee lookups are scoped to.
    /// * `timeout_ms` - Bounded per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the token is not a valid header
    /// value or the HTTP client cannot be created.
    pub fn new(
        base_url: impl Into<String>,
        token: &str,
        shop_id: ShopId,
        timeout_ms: u64,
    ) -> ProviderResult<Self> {
        let mut headers = HeaderMap::new();
        let token_value = HeaderValue::from_str(token)
            .map_err(|e| ProviderError::internal(format!("invalid provider token: {}", e)))?;
        headers.insert("Token", token_value);

        Ok(Self {
            http: HttpClient::with_headers(timeout_ms, headers)?,
            base_url: base_url.into(),
            shop_id,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn shop_header(&self) -> ProviderResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&self.shop_id.get().to_string())
            .map_err(|e| ProviderError::internal(format!("invalid shop id header: {}", e)))?;
        headers.insert("ShopId", value);
        Ok(headers)
    }
}

#[async_trait]
impl LogisticsProvider for GhnClient {
    async fn provinces(&self) -> ProviderResult<Value> {
        self.http.get(&self.url("/master-data/province")).await
    }

    async fn districts(&self, province_id: ProvinceId) -> ProviderResult<Value> {
        self.http
            .get_with_params(
                &self.url("/master-data/district"),
                &[("province_id", province_id.get())],
            )
            .await
    }

    async fn wards(&self, district_id: DistrictId) -> ProviderResult<Value> {
        self.http
            .get_with_params(
                &self.url("/master-data/ward"),
                &[("district_id", district_id.get())],
            )
            .await
    }

    async fn available_services(
        &self,
        from_district: DistrictId,
        to_district: DistrictId,
    ) -> ProviderResult<ServiceList> {
        let body = AvailableServicesBody {
            shop_id: self.shop_id.get(),
            from_district: from_district.get(),
            to_district: to_district.get(),
        };
        self.http
            .post(&self.url("/v2/shipping-order/available-services"), &body)
            .await
    }

    async fn calculate_fee(&self, request: &FeeRequest) -> ProviderResult<FeeQuote> {
        self.http
            .post_with_headers(
                &self.url("/v2/shipping-order/fee"),
                request,
                self.shop_header()?,
            )
            .await
    }
}
