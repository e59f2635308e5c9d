//! Record identifiers
//!
//! Each record kind gets its own UUID newtype so a budget ID can never be
//! passed where a transaction ID is expected. IDs display as a kind prefix
//! plus the first eight hex digits, e.g. `txn-1a2b3c4d`; the full UUID is
//! what gets stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// A fresh random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse a full UUID, with or without the display prefix
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                let s = s.trim();
                let s = s.strip_prefix($prefix).unwrap_or(s);
                Uuid::parse_str(s).map(Self)
            }

            /// Whether `s` is a prefix of this ID as typed by a user:
            /// "txn-1a2b", "1a2b" or the full UUID, case-insensitive
            pub fn matches_short(&self, s: &str) -> bool {
                let s = s.trim();
                let s = s.strip_prefix($prefix).unwrap_or(s);
                !s.is_empty() && self.0.to_string().starts_with(&s.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let full = self.0.to_string();
                write!(f, "{}{}", $prefix, &full[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(BudgetId, "bud-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = TransactionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_serialization() {
        let id = BudgetId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: BudgetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_from_str_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: TransactionId = format!("txn-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_matches_short() {
        let id = BudgetId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches_short("bud-550e8400"));
        assert!(id.matches_short("550E84"));
        assert!(!id.matches_short("bud-"));
        assert!(!id.matches_short("660e"));
    }
}
