//! The live world as seen by TradeScout.
//!
//! [`MarketView`] is the read-only snapshot the query works against; the
//! query holds only shared borrows of it. [`MarketRegistry`] adds the two
//! whole-value replacements needed by bulk copy. [`World`] is the
//! in-memory, serde-backed implementation of both.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Exchange, ExchangeConfig, ExchangeId, Item, Result, Seller, SellerId, StoreConfig,
    TradescoutError,
};

/// Read access to catalog and marketplace entities.
pub trait MarketView {
    /// Full item catalog, hidden items included.
    fn items(&self) -> impl Iterator<Item = &Item>;

    /// Every seller in the world, in enumeration order.
    fn sellers(&self) -> impl Iterator<Item = &Seller>;

    /// Every exchange in the world, in enumeration order.
    fn exchanges(&self) -> impl Iterator<Item = &Exchange>;

    fn seller(&self, id: SellerId) -> Option<&Seller> {
        self.sellers().find(|s| s.id == id)
    }

    fn exchange(&self, id: ExchangeId) -> Option<&Exchange> {
        self.exchanges().find(|e| e.id == id)
    }
}

/// Write access used by bulk copy. Each call replaces the whole value in a
/// single assignment and hands back the previous one.
pub trait MarketRegistry: MarketView {
    fn replace_store_config(&mut self, id: SellerId, config: StoreConfig) -> Result<StoreConfig>;

    fn replace_exchange_config(
        &mut self,
        id: ExchangeId,
        config: ExchangeConfig,
    ) -> Result<ExchangeConfig>;
}

/// In-memory world snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub exchanges: Vec<Exchange>,
}

impl World {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let world = Self::from_json(&contents)?;
        tracing::debug!(
            ?path,
            items = world.items.len(),
            sellers = world.sellers.len(),
            exchanges = world.exchanges.len(),
            "World snapshot loaded"
        );
        Ok(world)
    }

    /// Write the snapshot back as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        tracing::debug!(?path, "World snapshot saved");
        Ok(())
    }
}

impl MarketView for World {
    fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    fn sellers(&self) -> impl Iterator<Item = &Seller> {
        self.sellers.iter()
    }

    fn exchanges(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter()
    }
}

impl MarketRegistry for World {
    fn replace_store_config(&mut self, id: SellerId, config: StoreConfig) -> Result<StoreConfig> {
        let seller = self
            .sellers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(TradescoutError::SellerNotFound(id))?;
        Ok(std::mem::replace(&mut seller.store, config))
    }

    fn replace_exchange_config(
        &mut self,
        id: ExchangeId,
        config: ExchangeConfig,
    ) -> Result<ExchangeConfig> {
        let exchange = self
            .exchanges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(TradescoutError::ExchangeNotFound(id))?;
        Ok(std::mem::replace(&mut exchange.config, config))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::{AccessList, Currency, ItemTypeId, TradeOffer, UserId};

    fn sample_world() -> World {
        World {
            items: vec![Item::dummy(1, "Wheat")],
            sellers: vec![
                Seller::dummy("Mill", Currency::minted("Gold"), 2)
                    .with_buy_offer(TradeOffer::new(ItemTypeId(1), Decimal::ONE)),
            ],
            exchanges: vec![Exchange::new("Bank", AccessList::public(UserId::new()))],
        }
    }

    #[test]
    fn lookup_by_id() {
        let world = sample_world();
        let id = world.sellers[0].id;
        assert_eq!(world.seller(id).map(|s| s.name.as_str()), Some("Mill"));
        assert!(world.seller(SellerId::new()).is_none());
    }

    #[test]
    fn replace_store_config_returns_previous() {
        let mut world = sample_world();
        let id = world.sellers[0].id;
        let previous = world.replace_store_config(id, StoreConfig::new()).unwrap();
        assert_eq!(previous.buy_offers().count(), 1);
        assert_eq!(world.sellers[0].store.buy_offers().count(), 0);
    }

    #[test]
    fn replace_unknown_seller_fails() {
        let mut world = sample_world();
        let err = world
            .replace_store_config(SellerId::new(), StoreConfig::new())
            .unwrap_err();
        assert!(matches!(err, TradescoutError::SellerNotFound(_)));
    }

    #[test]
    fn replace_unknown_exchange_fails() {
        let mut world = sample_world();
        let err = world
            .replace_exchange_config(ExchangeId::new(), ExchangeConfig::default())
            .unwrap_err();
        assert!(matches!(err, TradescoutError::ExchangeNotFound(_)));
    }

    #[test]
    fn json_roundtrip() {
        let world = sample_world();
        let json = world.to_json_pretty().unwrap();
        let back = World::from_json(&json).unwrap();
        assert_eq!(world, back);
    }
}
