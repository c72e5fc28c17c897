//! # Infrastructure Layer
//!
//! Adapters for the two external collaborators: the logistics provider and
//! the currency-rate source. Each integration exposes a port trait so the
//! application layer never touches a concrete HTTP client.

pub mod logistics;
pub mod rates;
