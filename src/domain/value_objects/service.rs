//! # Service Descriptor
//!
//! One shipping product offered by the provider on a given route, and the
//! deterministic policy for choosing between them.
//!
//! The provider returns services in an order of its own choosing; that order
//! is not stable across calls. Selection is a business rule: prefer the
//! provider's "standard" tier, otherwise take the first entry as returned.

use crate::domain::value_objects::ids::ServiceId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The provider's sentinel for its "standard" service tier.
pub const STANDARD_SERVICE_TYPE: i64 = 2;

/// A shipping product available on a route.
///
/// Unknown provider fields are retained so the descriptor can be surfaced
/// back to callers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// The provider's service identifier.
    pub service_id: ServiceId,
    /// The provider's service tier sentinel.
    pub service_type_id: i64,
    /// Remaining provider fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceDescriptor {
    /// Returns true if this service belongs to the standard tier.
    #[inline]
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.service_type_id == STANDARD_SERVICE_TYPE
    }
}

/// Selects a service from a provider-ordered list.
///
/// Policy, applied exactly in this order:
/// 1. an empty list yields `None`;
/// 2. otherwise the first entry whose tier is [`STANDARD_SERVICE_TYPE`];
/// 3. otherwise the first entry in provider-returned order.
///
/// This is a business rule, not an optimization; no cheapest or fastest
/// heuristic is applied.
#[must_use]
pub fn select_service(services: &[ServiceDescriptor]) -> Option<&ServiceDescriptor> {
    services
        .iter()
        .find(|s| s.is_standard())
        .or_else(|| services.first())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn descriptor(service_id: i64, service_type_id: i64) -> ServiceDescriptor {
        ServiceDescriptor {
            service_id: ServiceId::new(service_id),
            service_type_id,
            extra: Map::new(),
        }
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert!(select_service(&[]).is_none());
    }

    #[test]
    fn standard_tier_wins_even_when_not_first() {
        let services = vec![descriptor(100, 5), descriptor(200, 2), descriptor(300, 2)];
        let chosen = select_service(&services).unwrap();
        assert_eq!(chosen.service_id, ServiceId::new(200));
    }

    #[test]
    fn falls_back_to_first_in_provider_order() {
        let services = vec![descriptor(100, 5), descriptor(200, 3)];
        let chosen = select_service(&services).unwrap();
        assert_eq!(chosen.service_id, ServiceId::new(100));
    }

    #[test]
    fn unknown_provider_fields_survive_deserialization() {
        let json = r#"{"service_id": 53320, "service_type_id": 2, "short_name": "Standard"}"#;
        let descriptor: ServiceDescriptor = serde_json::from_str(json).unwrap();
        assert!(descriptor.is_standard());
        assert_eq!(
            descriptor.extra.get("short_name"),
            Some(&Value::String("Standard".to_string()))
        );
    }
}
