//! # Application Errors
//!
//! Error types for the quotation use case.
//!
//! The taxonomy is deliberately two-tier, mirroring how failures are shown
//! to callers:
//!
//! ```text
//! QuotationError
//! ├── NoServiceAvailable        - user-correctable, client error
//! └── Provider(ProviderError)   - provider/transport failure, server error
//! ```
//!
//! Rate-source failures never appear here: they are absorbed inside the
//! orchestrator and reported through the response's rate field instead.

use crate::infrastructure::logistics::error::ProviderError;
use serde_json::Value;
use thiserror::Error;

/// Error type for the quotation pipeline.
#[derive(Debug, Clone, Error)]
pub enum QuotationError {
    /// No shipping product exists for the requested route.
    ///
    /// User-correctable (choose a different destination); surfaced as a
    /// client error, distinct from provider failures.
    #[error("no shipping service available for this route")]
    NoServiceAvailable,

    /// The logistics provider rejected or failed a request.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl QuotationError {
    /// Returns true if the error is user-correctable.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NoServiceAvailable)
    }

    /// Returns the diagnostic payload shown to the caller.
    ///
    /// For provider failures this is the provider's own error body when one
    /// was preserved, else the error text.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::NoServiceAvailable => Value::String(self.to_string()),
            Self::Provider(e) => e.payload(),
        }
    }
}

/// Result type for quotation operations.
pub type QuotationResult<T> = Result<T, QuotationError>;
