//! # Logistics Provider Integration
//!
//! Port and adapter for the external shipping-fee/service-lookup service.
//!
//! - [`traits::LogisticsProvider`]: the port the quotation pipeline and
//!   REST handlers depend on
//! - [`ghn::GhnClient`]: adapter for a GHN-style gateway
//! - [`http_client::HttpClient`]: shared reqwest wrapper with bounded
//!   timeouts and uniform error mapping
//! - [`error::ProviderError`]: failure taxonomy preserving provider bodies

pub mod error;
pub mod ghn;
pub mod http_client;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use ghn::GhnClient;
pub use http_client::HttpClient;
pub use traits::{FeeRequest, LogisticsProvider, ServiceList};
