//! Identifiers used throughout TradeScout.
//!
//! World entities (users, sellers, exchanges) use UUIDv7 so that freshly
//! created entities sort by creation time. Items use the stable numeric type
//! id assigned by the item catalog.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// UserId
// ---------------------------------------------------------------------------

/// Identifier of a requesting party (a player account).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

// ---------------------------------------------------------------------------
// SellerId
// ---------------------------------------------------------------------------

/// Identifier of a marketplace location (a store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SellerId(pub Uuid);

impl SellerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for SellerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seller:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ExchangeId
// ---------------------------------------------------------------------------

/// Identifier of a currency exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ExchangeId(pub Uuid);

impl ExchangeId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ExchangeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exchange:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ItemTypeId
// ---------------------------------------------------------------------------

/// Stable type id of an item. Offers and stock slots reference items by this
/// id, never by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ItemTypeId(pub u32);

impl fmt::Display for ItemTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_uniqueness() {
        let a = UserId::new();
        let b = UserId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn seller_id_ordering() {
        let a = SellerId::new();
        let b = SellerId::new();
        assert!(a < b);
    }

    #[test]
    fn user_id_parses_from_display() {
        let id = UserId::new();
        let back: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn display_prefixes() {
        assert_eq!(ItemTypeId(42).to_string(), "item:42");
        assert!(SellerId::new().to_string().starts_with("seller:"));
        assert!(ExchangeId::new().to_string().starts_with("exchange:"));
    }

    #[test]
    fn item_type_id_is_plain_number_in_json() {
        let json = serde_json::to_string(&ItemTypeId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
