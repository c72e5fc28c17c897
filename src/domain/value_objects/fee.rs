//! # Fee Quote
//!
//! The provider's monetary quote for a shipment, kept as an opaque
//! pass-through envelope with two explicitly typed override points.
//!
//! Only `total` and `service_fee` are ever rewritten (when a usable
//! exchange rate is available); every other field, and any non-numeric
//! value in those two, travels through the pipeline untouched.

use crate::domain::value_objects::money::redenominate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// The provider's fee response envelope.
///
/// `code` and `message` are opaque to this system and surfaced to callers
/// exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeQuote {
    /// Provider status code, passed through unchanged.
    #[serde(default)]
    pub code: Value,
    /// Provider status message, passed through unchanged.
    #[serde(default)]
    pub message: Value,
    /// The fee breakdown, absent when the provider omits it.
    #[serde(default)]
    pub data: Option<FeeBreakdown>,
    /// Remaining top-level provider fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The monetary breakdown of a fee quote.
///
/// `total` and `service_fee` are the only fields this system rewrites, and
/// only when each holds a numeric value. Everything else is retained in
/// `extra` and serialized back verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Total fee in the provider's native currency, override-if-present.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<Value>,
    /// Service fee in the provider's native currency, override-if-present.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_fee: Option<Value>,
    /// Remaining provider fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Deserializes a present key into `Some`, keeping an explicit null as
/// `Some(Value::Null)`. `None` therefore means the key was absent, so an
/// absent key stays absent and a null key stays null on the way back out.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl FeeBreakdown {
    /// Rewrites the two monetary fields into the target currency.
    ///
    /// Each field is converted independently, and only when it currently
    /// holds a numeric value; absent or non-numeric fields are left as-is.
    /// A field whose conversion cannot be represented is also left as-is.
    pub fn convert_monetary_fields(&mut self, rate: f64) {
        convert_in_place(&mut self.total, rate);
        convert_in_place(&mut self.service_fee, rate);
    }
}

fn convert_in_place(field: &mut Option<Value>, rate: f64) {
    if let Some(Value::Number(native)) = field {
        if let Some(converted) = native.as_f64().and_then(|n| redenominate(n, rate)) {
            if let Some(number) = Number::from_f64(converted) {
                *field = Some(Value::Number(number));
            }
        }
    }
}
