//! # Currency-Rate Integration
//!
//! Port and adapter for the external rate source.
//!
//! Rate fetching is the one soft-failure path in the system: any failure
//! degrades the quotation to "no conversion applied" instead of aborting.

pub mod error;
pub mod open_er;
pub mod traits;

pub use error::{RateResult, RateUnavailable};
pub use open_er::OpenErApiSource;
pub use traits::RateSource;
