//! # Shipment Specification
//!
//! Physical and declared attributes of a package to be quoted.
//!
//! Callers may omit any attribute; the documented defaults are merged in
//! before the fee request is built, so downstream components always see a
//! complete [`ShipmentSpec`].
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::value_objects::shipment::{ShipmentOverrides, ShipmentSpec};
//!
//! let spec = ShipmentSpec::from_overrides(ShipmentOverrides::default());
//! assert_eq!(spec.weight, ShipmentSpec::DEFAULT_WEIGHT);
//! assert!(spec.coupon.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// A complete shipment specification with every attribute resolved.
///
/// Dimensions and weight are in the provider's implied units; the declared
/// insurance value is in the provider's native currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentSpec {
    /// Package height.
    pub height: u32,
    /// Package length.
    pub length: u32,
    /// Package width.
    pub width: u32,
    /// Package weight.
    pub weight: u32,
    /// Declared insurance value in the provider's native currency.
    pub insurance_value: u64,
    /// Optional coupon code forwarded to the provider.
    pub coupon: Option<String>,
}

/// Caller-supplied partial shipment attributes.
///
/// Any omitted field takes the corresponding [`ShipmentSpec`] default when
/// merged via [`ShipmentSpec::from_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShipmentOverrides {
    /// Package height, if overridden.
    pub height: Option<u32>,
    /// Package length, if overridden.
    pub length: Option<u32>,
    /// Package width, if overridden.
    pub width: Option<u32>,
    /// Package weight, if overridden.
    pub weight: Option<u32>,
    /// Declared insurance value, if overridden.
    pub insurance_value: Option<u64>,
    /// Coupon code, if any.
    pub coupon: Option<String>,
}

impl ShipmentSpec {
    /// Default package height.
    pub const DEFAULT_HEIGHT: u32 = 15;
    /// Default package length.
    pub const DEFAULT_LENGTH: u32 = 15;
    /// Default package width.
    pub const DEFAULT_WIDTH: u32 = 15;
    /// Default package weight.
    pub const DEFAULT_WEIGHT: u32 = 1000;
    /// Default declared insurance value.
    pub const DEFAULT_INSURANCE_VALUE: u64 = 500_000;

    /// Merges caller overrides onto the documented defaults.
    ///
    /// Each field is resolved independently; an omitted field takes exactly
    /// its default, a supplied field is used as-is.
    #[must_use]
    pub fn from_overrides(overrides: ShipmentOverrides) -> Self {
        Self {
            height: overrides.height.unwrap_or(Self::DEFAULT_HEIGHT),
            length: overrides.length.unwrap_or(Self::DEFAULT_LENGTH),
            width: overrides.width.unwrap_or(Self::DEFAULT_WIDTH),
            weight: overrides.weight.unwrap_or(Self::DEFAULT_WEIGHT),
            insurance_value: overrides
                .insurance_value
                .unwrap_or(Self::DEFAULT_INSURANCE_VALUE),
            coupon: overrides.coupon,
        }
    }
}

impl Default for ShipmentSpec {
    fn default() -> Self {
        Self::from_overrides(ShipmentOverrides::default())
    }
}
