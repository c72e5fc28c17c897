//! # Rate Source Errors
//!
//! The single, uniform failure type for rate lookups.
//!
//! Every rate-source failure mode collapses into [`RateUnavailable`]:
//! network errors, non-success statuses, malformed bodies, and missing or
//! unusable rate entries are indistinguishable to callers. The quotation
//! pipeline absorbs this error entirely and proceeds without conversion.

use thiserror::Error;

/// Soft failure: the exchange rate could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("exchange rate unavailable: {0}")]
pub struct RateUnavailable(pub String);

impl RateUnavailable {
    /// Creates a rate-unavailable error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type for rate source operations.
pub type RateResult<T> = Result<T, RateUnavailable>;
