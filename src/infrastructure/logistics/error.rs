//! # Logistics Provider Errors
//!
//! Error types for logistics provider operations.
//!
//! Failures at the provider abort the operation that needed them; nothing
//! is retried. When the provider rejects a request with its own error
//! payload, that payload is preserved verbatim for diagnostics and is
//! surfaced to the caller as-is.
//!
//! # Examples
//!
//! ```
//! use ship_quote::infrastructure::logistics::error::ProviderError;
//!
//! let error = ProviderError::timeout("request timed out after 10000ms");
//! assert!(error.body().is_none());
//!
//! let error = ProviderError::api(400, serde_json::json!({"code": 400}));
//! assert!(error.body().is_some());
//! ```

use serde_json::Value;
use thiserror::Error;

/// Error type for logistics provider operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Request timed out.
    #[error("provider timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("provider connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The provider answered with a non-success status.
    ///
    /// The response body is preserved unmodified; provider error codes are
    /// not reinterpreted here.
    #[error("provider rejected the request (status {status})")]
    Api {
        /// HTTP status returned by the provider.
        status: u16,
        /// The provider's error body, verbatim.
        body: Value,
    },

    /// The response could not be parsed.
    #[error("provider protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// Internal adapter error.
    #[error("provider internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl ProviderError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an error preserving the provider's rejection body.
    #[must_use]
    pub fn api(status: u16, body: Value) -> Self {
        Self::Api { status, body }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the provider's error body, if one was preserved.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns the diagnostic payload shown to the caller.
    ///
    /// The provider's own body when present, otherwise the transport error
    /// text.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::Api { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

/// Result type for logistics provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_preserves_the_body() {
        let body = json!({"code": 400, "message": "route not supported"});
        let error = ProviderError::api(400, body.clone());
        assert_eq!(error.body(), Some(&body));
        assert_eq!(error.payload(), body);
    }

    #[test]
    fn transport_errors_surface_their_text() {
        let error = ProviderError::connection("connection refused");
        assert!(error.body().is_none());
        let payload = error.payload();
        assert!(payload.as_str().unwrap().contains("connection refused"));
    }

    #[test]
    fn display_format() {
        let error = ProviderError::timeout("request timed out");
        let display = error.to_string();
        assert!(display.contains("timeout"));
        assert!(display.contains("request timed out"));
    }
}
