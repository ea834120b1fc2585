//! Trade offers configured on a store.
//!
//! A store publishes buy offers (it purchases items from players) and sell
//! offers (it sells items to players), both organised in named categories.
//! The want-to-sell query only looks at buy offers; bulk copy duplicates
//! both sides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ItemTypeId;

/// Which side of the store an offer or category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OfferSide {
    /// The store buys from players.
    Buy,
    /// The store sells to players.
    Sell,
}

impl std::fmt::Display for OfferSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// A published price for one item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffer {
    pub item: ItemTypeId,
    /// Unit price in the store's currency.
    pub price: Decimal,
    /// Maximum quantity the store wants to hold; 0 means unlimited.
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub min_durability: Decimal,
    #[serde(default = "full_durability")]
    pub max_durability: Decimal,
}

fn full_durability() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl TradeOffer {
    #[must_use]
    pub fn new(item: ItemTypeId, price: Decimal) -> Self {
        Self {
            item,
            price,
            limit: 0,
            min_durability: Decimal::ZERO,
            max_durability: full_durability(),
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// `Some(limit)` if a purchase limit is set.
    #[must_use]
    pub fn purchase_limit(&self) -> Option<u32> {
        (self.limit > 0).then_some(self.limit)
    }
}

/// A named group of offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferCategory {
    pub name: String,
    #[serde(default)]
    pub offers: Vec<TradeOffer>,
}

impl OfferCategory {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            offers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_offer(mut self, offer: TradeOffer) -> Self {
        self.offers.push(offer);
        self
    }
}

/// The full trade configuration of a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub buy_categories: Vec<OfferCategory>,
    #[serde(default)]
    pub sell_categories: Vec<OfferCategory>,
}

impl StoreConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn categories(&self, side: OfferSide) -> &[OfferCategory] {
        match side {
            OfferSide::Buy => &self.buy_categories,
            OfferSide::Sell => &self.sell_categories,
        }
    }

    /// All buy offers, in configured order (category by category).
    pub fn buy_offers(&self) -> impl Iterator<Item = &TradeOffer> {
        self.buy_categories.iter().flat_map(|c| c.offers.iter())
    }

    /// Number of offers on one side.
    #[must_use]
    pub fn offer_count(&self, side: OfferSide) -> usize {
        self.categories(side).iter().map(|c| c.offers.len()).sum()
    }
}
