//! Currency exchanges and their configured rate and holding tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccessList, Currency, ExchangeId};

/// Rate at which the exchange swaps a customer currency for its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub customer_currency: Currency,
    pub owner_currency: Currency,
    pub price: Decimal,
}

/// Bounds on how much of a currency the exchange keeps on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingLimit {
    pub currency: Currency,
    pub min: Decimal,
    pub max: Decimal,
}

/// Everything an owner configures on an exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default)]
    pub rates: Vec<ExchangeRate>,
    #[serde(default)]
    pub holdings: Vec<HoldingLimit>,
}

/// A currency exchange in the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: ExchangeId,
    pub name: String,
    #[serde(default)]
    pub config: ExchangeConfig,
    #[serde(default)]
    pub access: AccessList,
}

impl Exchange {
    #[must_use]
    pub fn new(name: impl Into<String>, access: AccessList) -> Self {
        Self {
            id: ExchangeId::new(),
            name: name.into(),
            config: ExchangeConfig::default(),
            access,
        }
    }

    #[must_use]
    pub fn with_rate(mut self, customer: Currency, owner: Currency, price: Decimal) -> Self {
        self.config.rates.push(ExchangeRate {
            customer_currency: customer,
            owner_currency: owner,
            price,
        });
        self
    }

    #[must_use]
    pub fn with_holding_limit(mut self, currency: Currency, min: Decimal, max: Decimal) -> Self {
        self.config.holdings.push(HoldingLimit { currency, min, max });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserId;

    #[test]
    fn builders_append_entries() {
        let ex = Exchange::new("Bank", AccessList::public(UserId::new()))
            .with_rate(Currency::minted("Gold"), Currency::minted("Silver"), Decimal::TWO)
            .with_holding_limit(Currency::minted("Gold"), Decimal::ZERO, Decimal::ONE_HUNDRED);
        assert_eq!(ex.config.rates.len(), 1);
        assert_eq!(ex.config.holdings.len(), 1);
        assert_eq!(ex.config.rates[0].price, Decimal::TWO);
    }

    #[test]
    fn empty_config_from_json() {
        let cfg: ExchangeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.rates.is_empty());
        assert!(cfg.holdings.is_empty());
    }
}
