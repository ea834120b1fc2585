//! Sellers: marketplace locations that buy items from players.

use serde::{Deserialize, Serialize};

use crate::{
    AccessList, BankAccount, Currency, Holding, OfferCategory, SellerId, StorageCompartment,
    StoreConfig, TradeOffer,
};

/// A store in the world.
///
/// Owned and mutated by the surrounding simulation; the query only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    /// Switched-off stores never trade.
    pub active: bool,
    /// Currency every offer of this store settles in.
    pub currency: Currency,
    #[serde(default)]
    pub account: BankAccount,
    #[serde(default)]
    pub storage: Vec<StorageCompartment>,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub access: AccessList,
}

impl Seller {
    #[must_use]
    pub fn new(name: impl Into<String>, currency: Currency, access: AccessList) -> Self {
        Self {
            id: SellerId::new(),
            name: name.into(),
            active: true,
            currency,
            account: BankAccount::new(),
            storage: Vec::new(),
            store: StoreConfig::new(),
            access,
        }
    }

    /// Funds available in the store's own currency.
    #[must_use]
    pub fn funds(&self) -> Holding {
        self.account.holding(&self.currency)
    }

    /// Compartments that count toward sellable capacity.
    pub fn gated_compartments(&self) -> impl Iterator<Item = &StorageCompartment> {
        self.storage.iter().filter(|c| c.is_authorization_gated())
    }

    #[must_use]
    pub fn with_funds(mut self, amount: Holding) -> Self {
        self.account.set_holding(self.currency.clone(), amount);
        self
    }

    #[must_use]
    pub fn with_compartment(mut self, compartment: StorageCompartment) -> Self {
        self.storage.push(compartment);
        self
    }

    /// Append a buy offer to the first buy category, creating it if needed.
    #[must_use]
    pub fn with_buy_offer(mut self, offer: TradeOffer) -> Self {
        if self.store.buy_categories.is_empty() {
            self.store.buy_categories.push(OfferCategory::new("Buying"));
        }
        if let Some(category) = self.store.buy_categories.first_mut() {
            category.offers.push(offer);
        }
        self
    }

    #[must_use]
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Seller {
    /// An active store open to everyone, owned by a fresh user, with one
    /// empty authorization-gated compartment of `slots` slots.
    pub fn dummy(name: &str, currency: Currency, slots: usize) -> Self {
        Self::new(name, currency, AccessList::public(crate::UserId::new())).with_compartment(
            StorageCompartment::new(crate::CompartmentKind::AuthorizationGated, slots),
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::{CompartmentKind, ItemTypeId};

    #[test]
    fn funds_read_store_currency() {
        let gold = Currency::minted("Gold");
        let seller = Seller::dummy("Mill", gold.clone(), 1).with_funds(Holding::Finite(Decimal::TEN));
        assert_eq!(seller.funds(), Holding::Finite(Decimal::TEN));
    }

    #[test]
    fn gated_compartments_skip_internal() {
        let seller = Seller::dummy("Mill", Currency::minted("Gold"), 2)
            .with_compartment(StorageCompartment::new(CompartmentKind::Internal, 5));
        assert_eq!(seller.storage.len(), 2);
        assert_eq!(seller.gated_compartments().count(), 1);
    }

    #[test]
    fn with_buy_offer_creates_category() {
        let seller = Seller::dummy("Mill", Currency::minted("Gold"), 1)
            .with_buy_offer(TradeOffer::new(ItemTypeId(1), Decimal::ONE))
            .with_buy_offer(TradeOffer::new(ItemTypeId(2), Decimal::ONE));
        assert_eq!(seller.store.buy_categories.len(), 1);
        assert_eq!(seller.store.buy_offers().count(), 2);
    }

    #[test]
    fn seller_serde_roundtrip() {
        let seller = Seller::dummy("Mill", Currency::minted("Gold"), 3)
            .with_funds(Holding::Finite(Decimal::new(505, 1)))
            .with_buy_offer(TradeOffer::new(ItemTypeId(1), Decimal::ONE).with_limit(4));
        let json = serde_json::to_string(&seller).unwrap();
        let back: Seller = serde_json::from_str(&json).unwrap();
        assert_eq!(seller, back);
    }
}
