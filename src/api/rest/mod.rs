//! # REST API
//!
//! REST endpoints using axum for the storefront.
//!
//! # Endpoints
//!
//! ## Quotation
//! - `POST /api/shipping/fee/simplified` - Simplified quote with optional
//!   currency conversion (the core operation)
//!
//! ## Provider pass-through
//! - `GET /api/shipping/provinces` - List provinces
//! - `GET /api/shipping/districts` - List districts of a province
//! - `GET /api/shipping/wards` - List wards of a district
//! - `GET /api/shipping/services` - List services for a route
//! - `POST /api/shipping/fee` - Direct fee calculation
//!
//! ## Rates
//! - `GET /api/shipping/exchange-rate` - Current conversion rate
//!
//! ## Health
//! - `GET /api/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use ship_quote::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = AppState::new(logistics, rates);
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:9999").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, DistrictsQuery, ErrorResponse, ExchangeRateFailure, ExchangeRateResponse,
    HealthResponse, ServicesQuery, SimplifiedFeeRequest, WardsQuery,
};
pub use routes::{create_router, AppState};
