//! # Exchange Rate Value Object
//!
//! A validated conversion rate between the provider's native currency and
//! the target currency.
//!
//! The rate is defined as native currency units per one target currency
//! unit, so converting a native amount means dividing by the rate. Rates
//! are fetched fresh on every orchestration call and discarded afterwards;
//! no caching layer exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a rate value cannot represent a usable conversion.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("exchange rate must be positive and finite, got {0}")]
pub struct InvalidRate(pub f64);

/// A positive, finite conversion rate with source freshness information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    rate: f64,
    source: String,
    updated: Option<DateTime<Utc>>,
    fetched_at: DateTime<Utc>,
}

impl ExchangeRate {
    /// Creates a validated exchange rate.
    ///
    /// # Arguments
    ///
    /// * `rate` - Native currency units per target currency unit.
    /// * `source` - Human-readable name of the quote source.
    /// * `updated` - The source's own last-update timestamp, when known.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRate`] if `rate` is not a positive finite number.
    pub fn new(
        rate: f64,
        source: impl Into<String>,
        updated: Option<DateTime<Utc>>,
    ) -> Result<Self, InvalidRate> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(InvalidRate(rate));
        }
        Ok(Self {
            rate,
            source: source.into(),
            updated,
            fetched_at: Utc::now(),
        })
    }

    /// Returns the raw rate value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> f64 {
        self.rate
    }

    /// Returns the name of the quote source.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the source's last-update timestamp, when known.
    #[inline]
    #[must_use]
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    /// Returns when this rate was fetched from the source.
    #[inline]
    #[must_use]
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (from {})", self.rate, self.source)
    }
}
