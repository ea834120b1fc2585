//! Capacity calculation: how much more of an item a seller can physically
//! take in, and how much it already holds.
//!
//! Only authorization-gated compartments count. Per compartment the slot cap
//! is `max_accepted(item)`:
//!
//! ```text
//! empty slot            → fit += cap
//! slot holding the item → fit += cap - qty (never below 0), in_stock += qty
//! slot holding another  → nothing
//! ```

use tradescout_types::{Item, Seller, TradeOffer};

/// Physical space and resident stock for one (seller, item) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockCapacity {
    /// Units that still fit.
    pub fit: u64,
    /// Units already resident.
    pub in_stock: u64,
}

impl StockCapacity {
    /// Whether the offer's purchase limit is already met by resident stock.
    /// A seller in this state declines outright, whatever its free space.
    #[must_use]
    pub fn limit_reached(&self, offer: &TradeOffer) -> bool {
        offer
            .purchase_limit()
            .is_some_and(|limit| self.in_stock >= u64::from(limit))
    }

    /// Units the offer's limit still allows; `sentinel` when unlimited.
    #[must_use]
    pub fn remaining_allowance(&self, offer: &TradeOffer, sentinel: u64) -> u64 {
        match offer.purchase_limit() {
            Some(limit) => u64::from(limit).saturating_sub(self.in_stock),
            None => sentinel,
        }
    }
}

/// Compute fit and resident stock of `item` across the seller's gated
/// compartments.
#[must_use]
pub fn stock_capacity(seller: &Seller, item: &Item) -> StockCapacity {
    let mut capacity = StockCapacity::default();

    for compartment in seller.gated_compartments() {
        let cap = u64::from(compartment.max_accepted(item));
        for slot in &compartment.slots {
            match slot.item {
                None => capacity.fit += cap,
                Some(held) if held == item.id => {
                    let qty = u64::from(slot.quantity);
                    capacity.in_stock += qty;
                    capacity.fit += cap.saturating_sub(qty);
                }
                Some(_) => {}
            }
        }
    }

    capacity
}
