//! Currencies and the per-account holdings denominated in them.
//!
//! Two sellers settle in the same currency iff their [`Currency`] values
//! compare equal. Holdings distinguish a finite balance from an unlimited
//! one (e.g. a player's own personal credit), so that no division ever
//! produces a non-finite quantity downstream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of unit of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CurrencyKind {
    /// An ordinary, tradeable currency.
    Minted,
    /// Non-tradeable personal credit issued by a player.
    PlayerCredit,
}

impl std::fmt::Display for CurrencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minted => write!(f, "MINTED"),
            Self::PlayerCredit => write!(f, "PLAYER_CREDIT"),
        }
    }
}

/// A unit of account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub kind: CurrencyKind,
}

impl Currency {
    #[must_use]
    pub fn minted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CurrencyKind::Minted,
        }
    }

    #[must_use]
    pub fn player_credit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CurrencyKind::PlayerCredit,
        }
    }

    #[must_use]
    pub fn is_player_credit(&self) -> bool {
        self.kind == CurrencyKind::PlayerCredit
    }

    /// Ordering key for report sections: tradeable currencies first, then
    /// alphabetical by name.
    #[must_use]
    pub fn section_key(&self) -> (bool, &str) {
        (self.is_player_credit(), self.name.as_str())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// The amount of a currency held by an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Holding {
    Finite(Decimal),
    /// The account can never run out of this currency.
    Unlimited,
}

impl Default for Holding {
    fn default() -> Self {
        Self::Finite(Decimal::ZERO)
    }
}

/// One currency entry in a bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyHolding {
    pub currency: Currency,
    pub amount: Holding,
}

/// Liquid funds of a seller, per currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(default)]
    pub holdings: Vec<CurrencyHolding>,
}

impl BankAccount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the holding for a currency.
    pub fn set_holding(&mut self, currency: Currency, amount: Holding) {
        match self.holdings.iter_mut().find(|h| h.currency == currency) {
            Some(entry) => entry.amount = amount,
            None => self.holdings.push(CurrencyHolding { currency, amount }),
        }
    }

    /// Builder-style variant of [`Self::set_holding`].
    #[must_use]
    pub fn with_holding(mut self, currency: Currency, amount: Holding) -> Self {
        self.set_holding(currency, amount);
        self
    }

    /// Holding for a currency; an absent currency reads as zero.
    #[must_use]
    pub fn holding(&self, currency: &Currency) -> Holding {
        self.holdings
            .iter()
            .find(|h| h.currency == *currency)
            .map(|h| h.amount)
            .unwrap_or_default()
    }
}
