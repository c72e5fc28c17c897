//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for the logistics provider adapter.
//!
//! Provides JSON request/response handling with a bounded per-call timeout
//! and uniform error mapping. There is no retry logic anywhere: a failed
//! round trip is terminal for the operation that issued it.

use crate::infrastructure::logistics::error::{ProviderError, ProviderResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// HTTP client wrapper with default headers and a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout and default
    /// headers applied to every request.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the client cannot be created.
    pub fn with_headers(
        timeout_ms: u64,
        default_headers: reqwest::header::HeaderMap,
    ) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ProviderError::internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Timeout`/`Connection` if the request fails,
    /// `ProviderError::Api` on a non-success status, and
    /// `ProviderError::Protocol` if the body cannot be parsed.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a GET request with query parameters and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HttpClient::get`].
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a POST request with a JSON body and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HttpClient::get`].
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a POST request with a JSON body and additional headers.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HttpClient::get`].
    pub async fn post_with_headers<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
        headers: reqwest::header::HeaderMap,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .headers(headers)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }
}

/// Handles the HTTP response, checking status and deserializing JSON.
async fn handle_response<T: DeserializeOwned>(response: Response) -> ProviderResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::protocol(format!("failed to parse response: {}", e)))
    } else {
        Err(map_status_error(status, response).await)
    }
}

/// Maps a reqwest error to a ProviderError.
fn map_reqwest_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::timeout("request timed out")
    } else if error.is_connect() {
        ProviderError::connection(format!("connection failed: {}", error))
    } else {
        ProviderError::connection(format!("HTTP request failed: {}", error))
    }
}

/// Maps a non-success status to a ProviderError, preserving the body.
async fn map_status_error(status: StatusCode, response: Response) -> ProviderError {
    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
    ProviderError::api(status.as_u16(), body)
}
