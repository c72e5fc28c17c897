//! # Route Registration
//!
//! Shared application state and router construction.

use crate::api::rest::handlers;
use crate::application::services::quotation::QuotationService;
use crate::infrastructure::logistics::traits::LogisticsProvider;
use crate::infrastructure::rates::traits::RateSource;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The quotation orchestrator.
    pub quotation: Arc<QuotationService>,
    /// The logistics provider port, for pass-through lookups.
    pub logistics: Arc<dyn LogisticsProvider>,
    /// The rate source port, for the direct exchange-rate lookup.
    pub rates: Arc<dyn RateSource>,
}

impl AppState {
    /// Wires the application state from the two provider ports.
    #[must_use]
    pub fn new(logistics: Arc<dyn LogisticsProvider>, rates: Arc<dyn RateSource>) -> Self {
        Self {
            quotation: Arc::new(QuotationService::new(
                Arc::clone(&logistics),
                Arc::clone(&rates),
            )),
            logistics,
            rates,
        }
    }
}

/// Builds the complete API router.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/shipping/provinces", get(handlers::provinces))
        .route("/api/shipping/districts", get(handlers::districts))
        .route("/api/shipping/wards", get(handlers::wards))
        .route("/api/shipping/services", get(handlers::services))
        .route("/api/shipping/fee", post(handlers::fee))
        .route("/api/shipping/fee/simplified", post(handlers::simplified_fee))
        .route("/api/shipping/exchange-rate", get(handlers::exchange_rate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
