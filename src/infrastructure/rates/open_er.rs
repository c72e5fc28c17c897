//! # Open Exchange-Rate Table Adapter
//!
//! [`RateSource`] implementation for an open.er-api.com-style endpoint: a
//! single unauthenticated GET returning a conversion table anchored at a
//! reference currency. Only the configured target currency's entry is
//! consumed; everything else in the table is ignored.

use crate::domain::value_objects::ExchangeRate;
use crate::infrastructure::rates::error::{RateResult, RateUnavailable};
use crate::infrastructure::rates::traits::RateSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Client for an open exchange-rate table endpoint.
#[derive(Debug, Clone)]
pub struct OpenErApiSource {
    client: reqwest::Client,
    endpoint: String,
    target_currency: String,
}

#[derive(Debug, Deserialize)]
struct RateTable {
    #[serde(default)]
    rates: HashMap<String, f64>,
    #[serde(default)]
    time_last_update_utc: Option<String>,
}

impl OpenErApiSource {
    /// Creates a new rate source client.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the rate table, reference currency included.
    /// * `target_currency` - The one currency entry this source consumes.
    /// * `timeout_ms` - Bounded per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RateUnavailable`] if the HTTP client cannot be created.
    pub fn new(
        endpoint: impl Into<String>,
        target_currency: impl Into<String>,
        timeout_ms: u64,
    ) -> RateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| RateUnavailable::new(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            target_currency: target_currency.into(),
        })
    }

    /// Returns the host portion of the endpoint, used as the source name.
    #[must_use]
    pub fn source_name(&self) -> &str {
        host_of(&self.endpoint)
    }
}

/// Extracts the host from a URL, falling back to the whole string.
fn host_of(endpoint: &str) -> &str {
    let without_scheme = endpoint
        .split_once("://")
        .map_or(endpoint, |(_, rest)| rest);
    without_scheme
        .split(['/', '?'])
        .next()
        .unwrap_or(without_scheme)
}

#[async_trait]
impl RateSource for OpenErApiSource {
    async fn fetch_rate(&self) -> RateResult<ExchangeRate> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| RateUnavailable::new(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(RateUnavailable::new(format!(
                "rate source returned status {}",
                response.status()
            )));
        }

        let table: RateTable = response
            .json()
            .await
            .map_err(|e| RateUnavailable::new(format!("malformed rate table: {}", e)))?;

        let rate = table.rates.get(&self.target_currency).copied().ok_or_else(|| {
            RateUnavailable::new(format!(
                "no rate for {} in the returned table",
                self.target_currency
            ))
        })?;

        let updated = table
            .time_last_update_utc
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc2822(s).ok())
            .map(|t| t.with_timezone(&Utc));

        ExchangeRate::new(rate, host_of(&self.endpoint), updated)
            .map_err(|e| RateUnavailable::new(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(server: &MockServer) -> OpenErApiSource {
        OpenErApiSource::new(format!("{}/v6/latest/USD", server.uri()), "VND", 2000).unwrap()
    }

    #[test]
    fn host_extraction() {
        assert_eq!(host_of("https://open.er-api.com/v6/latest/USD"), "open.er-api.com");
        assert_eq!(host_of("open.er-api.com"), "open.er-api.com");
    }

    #[tokio::test]
    async fn extracts_the_target_currency_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v6/latest/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": "success",
                "time_last_update_utc": "Fri, 28 Aug 2026 00:02:31 +0000",
                "rates": {"VND": 25000.0, "EUR": 0.91}
            })))
            .mount(&server)
            .await;

        let rate = source(&server).fetch_rate().await.unwrap();
        assert!((rate.get() - 25000.0).abs() < f64::EPSILON);
        assert!(rate.updated().is_some());
    }

    #[tokio::test]
    async fn missing_target_currency_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v6/latest/USD"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"result": "success", "rates": {"EUR": 0.91}})),
            )
            .mount(&server)
            .await;

        assert!(source(&server).fetch_rate().await.is_err());
    }

    #[tokio::test]
    async fn malformed_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v6/latest/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        assert!(source(&server).fetch_rate().await.is_err());
    }

    #[tokio::test]
    async fn non_success_status_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v6/latest/USD"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        assert!(source(&server).fetch_rate().await.is_err());
    }

    #[tokio::test]
    async fn non_positive_rate_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v6/latest/USD"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"result": "success", "rates": {"VND": 0.0}})),
            )
            .mount(&server)
            .await;

        assert!(source(&server).fetch_rate().await.is_err());
    }
}
