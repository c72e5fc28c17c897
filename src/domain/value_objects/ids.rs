//! # Identifier Value Objects
//!
//! Newtypes for the logistics provider's location and service namespaces.
//!
//! All identifiers are opaque values minted by the provider. District and
//! ward identifiers are only meaningful relative to their parent province
//! or district; this crate performs no cross-checking (the provider is the
//! trust boundary).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a province in the provider's namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvinceId(i64);

/// Identifier of a district in the provider's namespace.
///
/// Only meaningful relative to its parent province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictId(i64);

/// Ward code in the provider's namespace.
///
/// Wards are keyed by string codes rather than integers. Only meaningful
/// relative to the parent district.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WardCode(String);

/// Identifier of a shipping service (one shipping product on a route).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(i64);

/// Identifier of the shop account registered with the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(i64);

impl ProvinceId {
    /// Creates a new province identifier.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[inline]
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl DistrictId {
    /// Creates a new district identifier.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[inline]
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl WardCode {
    /// Creates a new ward code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ServiceId {
    /// Creates a new service identifier.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[inline]
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl ShopId {
    /// Creates a new shop identifier.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[inline]
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProvinceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for WardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
