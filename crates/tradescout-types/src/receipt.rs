//! Receipts for completed bulk-copy operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which configuration was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopyKind {
    /// Buy and sell offer categories of a store.
    Store,
    /// Rate and holding tables of an exchange.
    Exchange,
}

impl std::fmt::Display for CopyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store => write!(f, "STORE"),
            Self::Exchange => write!(f, "EXCHANGE"),
        }
    }
}

/// How much was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyCounts {
    Store { buy_offers: usize, sell_offers: usize },
    Exchange { rates: usize, holdings: usize },
}

/// Proof that a destination's configuration was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReceipt {
    pub kind: CopyKind,
    /// Display name of the source entity.
    pub source: String,
    /// Display name of the destination entity.
    pub target: String,
    pub counts: CopyCounts,
    pub copied_at: DateTime<Utc>,
}

impl CopyReceipt {
    /// One-line summary of what was copied.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.counts {
            CopyCounts::Store {
                buy_offers,
                sell_offers,
            } => format!("Copied {sell_offers} sell and {buy_offers} buy offers successfully."),
            CopyCounts::Exchange { rates, holdings } => {
                format!("Copied {rates} exchange rates and {holdings} holdings successfully.")
            }
        }
    }
}
