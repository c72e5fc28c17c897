//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`QuotationService`]: the simplified-quote pipeline (resolve service,
//!   fetch fee, best-effort conversion)

pub mod quotation;

pub use quotation::{QuotationService, SimplifiedQuote};
