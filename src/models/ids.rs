//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short form used in listings (prefix + first 8 hex chars)
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.simple().to_string()[..8])
            }

            /// Whether `s` is this ID in full or short form
            pub fn matches(&self, s: &str) -> bool {
                let s = s.trim();
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return uuid == self.0;
                }
                let hex = s.strip_prefix($display_prefix).unwrap_or(s);
                hex.len() >= 4
                    && self
                        .0
                        .simple()
                        .to_string()
                        .starts_with(&hex.to_ascii_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ProductId, "prd-");
define_id!(HistoryEntryId, "his-");

impl ProductId {
    /// Deterministic ID for a built-in product, stable across resets
    pub fn seeded(slug: &str) -> Self {
        Self(Uuid::new_v5(
            &Uuid::NAMESPACE_OID,
            format!("hourlybuys:{}", slug).as_bytes(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = HistoryEntryId::new();
        let display = id.to_string();
        assert!(display.starts_with("his-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_seeded_ids_are_stable() {
        assert_eq!(ProductId::seeded("rice"), ProductId::seeded("rice"));
        assert_ne!(ProductId::seeded("rice"), ProductId::seeded("flour"));
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = ProductId::new();
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(id.matches(&id.short()));
        assert!(id.matches(&id.short()[4..]));
        assert!(!id.matches("prd-"));
        assert!(!id.matches(&ProductId::new().as_uuid().to_string()));
    }

    #[test]
    fn test_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: HistoryEntryId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }
}
