//! # Application Layer
//!
//! Use-case orchestration on top of the domain types and the
//! infrastructure ports.

pub mod error;
pub mod services;

pub use error::{QuotationError, QuotationResult};
pub use services::{QuotationService, SimplifiedQuote};
