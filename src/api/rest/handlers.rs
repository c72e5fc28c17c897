//! # REST Handlers
//!
//! Request/response types and handler functions for the storefront API.
//!
//! Handlers are thin: they deserialize, delegate to the quotation service
//! or a provider port, and map errors to the two-tier status scheme
//! (no-service is a client error, everything else is a server error).

use crate::api::rest::routes::AppState;
use crate::application::error::QuotationError;
use crate::application::services::quotation::SimplifiedQuote;
use crate::domain::value_objects::{DistrictId, FeeQuote, ProvinceId, ShipmentOverrides, WardCode};
use crate::infrastructure::logistics::error::ProviderError;
use crate::infrastructure::logistics::traits::{FeeRequest, ServiceList};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error envelope returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message, or the provider's error body verbatim.
    pub error: Value,
}

/// Wrapper mapping [`QuotationError`] onto HTTP responses.
///
/// Exactly two tiers: `NoServiceAvailable` is 400, every other failure is
/// 500. Provider-declared error codes are deliberately not mapped to finer
/// statuses.
#[derive(Debug)]
pub struct ApiError(QuotationError);

impl From<QuotationError> for ApiError {
    fn from(error: QuotationError) -> Self {
        Self(error)
    }
}

impl From<ProviderError> for ApiError {
    fn from(error: ProviderError) -> Self {
        Self(QuotationError::Provider(error))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self.0, "quotation request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (
            status,
            Json(ErrorResponse {
                error: self.0.payload(),
            }),
        )
            .into_response()
    }
}

/// Body of the simplified-quote operation.
#[derive(Debug, Clone, Deserialize)]
pub struct SimplifiedFeeRequest {
    /// Origin district.
    pub from_district_id: DistrictId,
    /// Destination district.
    pub to_district_id: DistrictId,
    /// Destination ward code.
    pub to_ward_code: WardCode,
    /// Optional shipment attributes; omitted fields take the defaults.
    #[serde(flatten)]
    pub shipment: ShipmentOverrides,
}

/// Query parameters for the districts lookup.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DistrictsQuery {
    /// The parent province.
    pub province_id: ProvinceId,
}

/// Query parameters for the wards lookup.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WardsQuery {
    /// The parent district.
    pub district_id: DistrictId,
}

/// Query parameters for the available-services lookup.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ServicesQuery {
    /// Origin district.
    pub from_district: DistrictId,
    /// Destination district.
    pub to_district: DistrictId,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving.
    pub status: &'static str,
}

/// Successful exchange-rate lookup response.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRateResponse {
    /// Always true on this variant.
    pub success: bool,
    /// Native currency units per target currency unit.
    pub rate: f64,
    /// Name of the quote source.
    pub source: String,
    /// The source's last-update timestamp, when known.
    pub updated: Option<DateTime<Utc>>,
}

/// Failed exchange-rate lookup response.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRateFailure {
    /// Always false on this variant.
    pub success: bool,
    /// Human-readable failure description.
    pub error: String,
}

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /api/shipping/provinces`
pub async fn provinces(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.logistics.provinces().await?))
}

/// `GET /api/shipping/districts?province_id=`
pub async fn districts(
    State(state): State<AppState>,
    Query(query): Query<DistrictsQuery>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.logistics.districts(query.province_id).await?))
}

/// `GET /api/shipping/wards?district_id=`
pub async fn wards(
    State(state): State<AppState>,
    Query(query): Query<WardsQuery>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.logistics.wards(query.district_id).await?))
}

/// `GET /api/shipping/services?from_district=&to_district=`
pub async fn services(
    State(state): State<AppState>,
    Query(query): Query<ServicesQuery>,
) -> Result<Json<ServiceList>, ApiError> {
    Ok(Json(
        state
            .logistics
            .available_services(query.from_district, query.to_district)
            .await?,
    ))
}

/// `POST /api/shipping/fee`
///
/// Direct fee calculation with caller-supplied parameters; unknown fields
/// are forwarded to the provider untouched.
pub async fn fee(
    State(state): State<AppState>,
    Json(request): Json<FeeRequest>,
) -> Result<Json<FeeQuote>, ApiError> {
    Ok(Json(state.logistics.calculate_fee(&request).await?))
}

/// `POST /api/shipping/fee/simplified`
///
/// The core quotation operation: resolve a service, fetch the fee, and
/// best-effort convert the monetary fields.
pub async fn simplified_fee(
    State(state): State<AppState>,
    Json(request): Json<SimplifiedFeeRequest>,
) -> Result<Json<SimplifiedQuote>, ApiError> {
    let quote = state
        .quotation
        .simplified_quote(
            request.from_district_id,
            request.to_district_id,
            request.to_ward_code,
            request.shipment,
        )
        .await?;
    Ok(Json(quote))
}

/// `GET /api/shipping/exchange-rate`
///
/// Exposes the rate source directly. Unlike the quotation pipeline, a
/// failure here is surfaced as a server error rather than absorbed.
pub async fn exchange_rate(State(state): State<AppState>) -> Response {
    match state.rates.fetch_rate().await {
        Ok(rate) => Json(ExchangeRateResponse {
            success: true,
            rate: rate.get(),
            source: rate.source().to_string(),
            updated: rate.updated(),
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ExchangeRateFailure {
                success: false,
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
