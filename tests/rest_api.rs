//! End-to-end tests for the REST surface against mocked upstreams.
//!
//! Each test wires the real adapters at a wiremock server and drives the
//! axum router directly, so the full pipeline (handler, orchestrator,
//! adapters, error mapping) is exercised without a network.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use ship_quote::api::rest::{create_router, AppState};
use ship_quote::domain::value_objects::ShopId;
use ship_quote::infrastructure::logistics::ghn::GhnClient;
use ship_quote::infrastructure::rates::open_er::OpenErApiSource;
use std::sync::Arc;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_state(provider: &MockServer, rates: &MockServer) -> AppState {
    let logistics =
        GhnClient::new(provider.uri(), "test-token", ShopId::new(4833), 2000).unwrap();
    let source =
        OpenErApiSource::new(format!("{}/v6/latest/USD", rates.uri()), "VND", 2000).unwrap();
    AppState::new(Arc::new(logistics), Arc::new(source))
}

async fn mount_services(provider: &MockServer, data: Value, expected_fee_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v2/shipping-order/available-services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": data
        })))
        .mount(provider)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/shipping-order/fee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": {"total": 100, "service_fee": 20, "insurance_fee": 0}
        })))
        .expect(expected_fee_calls)
        .mount(provider)
        .await;
}

async fn mount_rate(rates: &MockServer, vnd: f64) {
    Mock::given(method("GET"))
        .and(path("/v6/latest/USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "time_last_update_utc": "Fri, 28 Aug 2026 00:02:31 +0000",
            "rates": {"VND": vnd}
        })))
        .mount(rates)
        .await;
}

fn simplified_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/shipping/fee/simplified")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn simplified_quote_converts_with_a_live_rate() {
    let provider = MockServer::start().await;
    let rates = MockServer::start().await;
    mount_services(
        &provider,
        json!([{"service_id": 53320, "service_type_id": 2}]),
        1,
    )
    .await;
    mount_rate(&rates, 20.0).await;

    let router = create_router(test_state(&provider, &rates));
    let response = router
        .oneshot(simplified_request(json!({
            "from_district_id": 1442,
            "to_district_id": 1820,
            "to_ward_code": "030712"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["code"], json!(200));
    assert_eq!(body["usdRate"], json!(20.0));
    assert_eq!(body["data"]["total"], json!(5.0));
    assert_eq!(body["data"]["service_fee"], json!(1.0));
    assert_eq!(body["data"]["insurance_fee"], json!(0));
}

#[tokio::test]
async fn no_service_for_the_route_is_a_client_error() {
    let provider = MockServer::start().await;
    let rates = MockServer::start().await;
    mount_services(&provider, json!([]), 0).await;
    mount_rate(&rates, 20.0).await;

    let router = create_router(test_state(&provider, &rates));
    let response = router
        .oneshot(simplified_request(json!({
            "from_district_id": 1442,
            "to_district_id": 1820,
            "to_ward_code": "030712"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(
        body["error"],
        json!("no shipping service available for this route")
    );
}

#[tokio::test]
async fn rate_outage_degrades_to_native_currency() {
    let provider = MockServer::start().await;
    // No mock mounted: the rate server answers 404 for everything.
    let rates = MockServer::start().await;
    mount_services(
        &provider,
        json!([{"service_id": 53320, "service_type_id": 2}]),
        1,
    )
    .await;

    let router = create_router(test_state(&provider, &rates));
    let response = router
        .oneshot(simplified_request(json!({
            "from_district_id": 1442,
            "to_district_id": 1820,
            "to_ward_code": "030712"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["usdRate"], json!(0.0));
    assert_eq!(body["data"]["total"], json!(100));
    assert_eq!(body["data"]["service_fee"], json!(20));
}

#[tokio::test]
async fn provider_rejection_surfaces_its_body_as_server_error() {
    let provider = MockServer::start().await;
    let rates = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/shipping-order/available-services"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"code": 401, "message": "bad token"})),
        )
        .mount(&provider)
        .await;
    mount_rate(&rates, 20.0).await;

    let router = create_router(test_state(&provider, &rates));
    let response = router
        .oneshot(simplified_request(json!({
            "from_district_id": 1442,
            "to_district_id": 1820,
            "to_ward_code": "030712"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"]["message"], json!("bad token"));
}

#[tokio::test]
async fn shipment_overrides_reach_the_provider() {
    let provider = MockServer::start().await;
    let rates = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/shipping-order/available-services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": [{"service_id": 53320, "service_type_id": 2}]
        })))
        .mount(&provider)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/shipping-order/fee"))
        .and(wiremock::matchers::body_partial_json(json!({
            "service_id": 53320,
            "weight": 2500,
            "height": 15,
            "insurance_value": 500000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Success",
            "data": {"total": 100, "service_fee": 20}
        })))
        .expect(1)
        .mount(&provider)
        .await;
    mount_rate(&rates, 20.0).await;

    let router = create_router(test_state(&provider, &rates));
    let response = router
        .oneshot(simplified_request(json!({
            "from_district_id": 1442,
            "to_district_id": 1820,
            "to_ward_code": "030712",
            "weight": 2500
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn exchange_rate_endpoint_reports_the_source() {
    let provider = MockServer::start().await;
    let rates = MockServer::start().await;
    mount_rate(&rates, 25000.0).await;

    let router = create_router(test_state(&provider, &rates));
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/shipping/exchange-rate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["rate"], json!(25000.0));
    assert!(body["source"].as_str().unwrap().contains("127.0.0.1"));
}

#[tokio::test]
async fn exchange_rate_outage_is_a_server_error() {
    let provider = MockServer::start().await;
    let rates = MockServer::start().await;

    let router = create_router(test_state(&provider, &rates));
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/shipping/exchange-rate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn health_endpoint_answers() {
    let provider = MockServer::start().await;
    let rates = MockServer::start().await;

    let router = create_router(test_state(&provider, &rates));
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], json!("ok"));
}
