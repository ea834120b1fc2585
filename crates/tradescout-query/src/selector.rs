//! Offer selection: the single best buy offer of a seller for an item.

use tradescout_types::{ItemTypeId, Seller, TradeOffer};

/// Highest-priced buy offer of `seller` for `item`, matched by type id.
///
/// Among offers with the same maximal price the first one in configured
/// order (category order, then offer order) wins. `None` means the seller
/// is not buying this item.
#[must_use]
pub fn best_buy_offer(seller: &Seller, item: ItemTypeId) -> Option<&TradeOffer> {
    seller
        .store
        .buy_offers()
        .filter(|offer| offer.item == item)
        .fold(None, |best: Option<&TradeOffer>, offer| match best {
            Some(current) if current.price >= offer.price => Some(current),
            _ => Some(offer),
        })
}
