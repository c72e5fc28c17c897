//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ProvinceId`], [`DistrictId`], [`WardCode`]: location identifiers in
//!   the provider's namespace
//! - [`ServiceId`], [`ShopId`]: service and account identifiers
//!
//! ## Quotation Types
//!
//! - [`ShipmentSpec`] / [`ShipmentOverrides`]: package attributes with
//!   documented defaults
//! - [`ServiceDescriptor`] and [`select_service`]: shipping products and the
//!   deterministic selection policy
//! - [`FeeQuote`] / [`FeeBreakdown`]: the provider's monetary quote with two
//!   override-if-present fields
//! - [`ExchangeRate`]: validated native-per-target conversion rate
//! - [`redenominate`]: divide-by-rate conversion rounded half-up to 2 dp

pub mod exchange_rate;
pub mod fee;
pub mod ids;
pub mod money;
pub mod service;
pub mod shipment;

pub use exchange_rate::{ExchangeRate, InvalidRate};
pub use fee::{FeeBreakdown, FeeQuote};
pub use ids::{DistrictId, ProvinceId, ServiceId, ShopId, WardCode};
pub use money::redenominate;
pub use service::{select_service, ServiceDescriptor, STANDARD_SERVICE_TYPE};
pub use shipment::{ShipmentOverrides, ShipmentSpec};
