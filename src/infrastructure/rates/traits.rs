//! # Rate Source Port
//!
//! Port definition for the currency-rate integration.
//!
//! A rate source is a pure fetch-and-parse collaborator: one unauthenticated
//! read per call, no retry, no cache. The quotation pipeline calls it exactly
//! once per orchestration and treats any failure as "no conversion".

use crate::domain::value_objects::ExchangeRate;
use crate::infrastructure::rates::error::RateResult;
use async_trait::async_trait;
use std::fmt;

/// Trait defining the interface to the currency-rate source.
#[async_trait]
pub trait RateSource: Send + Sync + fmt::Debug {
    /// Fetches the current conversion rate for the target currency.
    ///
    /// # Errors
    ///
    /// Returns [`RateUnavailable`](crate::infrastructure::rates::error::RateUnavailable)
    /// uniformly for any failure: transport errors, malformed bodies, and
    /// missing or non-positive rate entries alike.
    async fn fetch_rate(&self) -> RateResult<ExchangeRate>;
}
