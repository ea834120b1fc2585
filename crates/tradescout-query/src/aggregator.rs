//! The want-to-sell query.
//!
//! ```text
//! resolve item ─► eligible sellers ─► per seller:
//!                                       best buy offer   (skip if none)
//!                                       stock capacity   (skip if limit reached)
//!                                       affordable qty
//!                                       sellable = min(fit, affordable, allowance)
//!                                    ─► group by currency ─► order sections
//! ```
//!
//! Read-only: only shared borrows of the world are taken.

use tradescout_types::{
    Authorizer, Item, MarketView, QueryConfig, Result, Seller, TradescoutError, UserId,
};

use crate::budget::affordable_quantity;
use crate::capacity::stock_capacity;
use crate::determinism::report_digest_hex;
use crate::directory::eligible_sellers;
use crate::report::{CurrencySection, SellLine, SellReport};
use crate::resolver::ItemResolver;
use crate::selector::best_buy_offer;

/// A configured want-to-sell query.
#[derive(Debug, Clone, Default)]
pub struct SellQuery {
    config: QueryConfig,
}

impl SellQuery {
    #[must_use]
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Run the query for `item_name` on behalf of `requester`.
    ///
    /// # Errors
    /// - [`TradescoutError::ItemNotFound`]: no visible item has that name.
    /// - [`TradescoutError::NoEligibleSeller`]: no active seller grants the
    ///   requester consumer access.
    /// - [`TradescoutError::NoMatchingOffer`]: no eligible seller is buying.
    pub fn run<W, A>(
        &self,
        world: &W,
        authorizer: &A,
        requester: UserId,
        item_name: &str,
    ) -> Result<SellReport>
    where
        W: MarketView,
        A: Authorizer + ?Sized,
    {
        let item = ItemResolver::from_world(world).resolve(item_name)?;

        let sellers = eligible_sellers(world, authorizer, requester);
        if sellers.is_empty() {
            tracing::debug!(requester = %requester, "No eligible seller");
            return Err(TradescoutError::NoEligibleSeller);
        }

        let sections = self.aggregate(item, sellers);
        if sections.is_empty() {
            tracing::debug!(item = %item, "No seller is buying");
            return Err(TradescoutError::NoMatchingOffer {
                item: item.display_name.clone(),
            });
        }

        let report = SellReport {
            item: item.clone(),
            sections,
        };
        tracing::info!(
            item = %report.item,
            requester = %requester,
            sections = report.sections.len(),
            sellers = report.line_count(),
            digest = %report_digest_hex(&report),
            "Want-to-sell query completed"
        );
        Ok(report)
    }

    /// Evaluate one seller. `None` when it is not buying `item` or its
    /// purchase limit is already met.
    #[must_use]
    pub fn evaluate(&self, seller: &Seller, item: &Item) -> Option<SellLine> {
        let Some(offer) = best_buy_offer(seller, item.id) else {
            tracing::debug!(seller = %seller.name, item = %item, "Seller has no buy offer");
            return None;
        };

        let capacity = stock_capacity(seller, item);
        if capacity.limit_reached(offer) {
            tracing::debug!(
                seller = %seller.name,
                in_stock = capacity.in_stock,
                limit = offer.limit,
                "Seller purchase limit reached"
            );
            return None;
        }

        let sentinel = self.config.unlimited_sentinel;
        let allowance = capacity.remaining_allowance(offer, sentinel);
        let affordable = affordable_quantity(seller.funds(), offer.price, sentinel);
        let quantity = capacity.fit.min(affordable).min(allowance);

        Some(SellLine {
            seller_id: seller.id,
            seller_name: seller.name.clone(),
            quantity,
            unit_price: offer.price,
        })
    }

    /// Evaluate `sellers` in order and group the surviving lines by
    /// currency. Sections come out ordered minted-before-player-credit,
    /// then by name; lines inside a section keep visit order.
    #[must_use]
    pub fn aggregate<'a>(
        &self,
        item: &Item,
        sellers: impl IntoIterator<Item = &'a Seller>,
    ) -> Vec<CurrencySection> {
        let mut sections: Vec<CurrencySection> = Vec::new();

        for seller in sellers {
            let Some(line) = self.evaluate(seller, item) else {
                continue;
            };
            match sections.iter_mut().find(|s| s.currency == seller.currency) {
                Some(section) => section.lines.push(line),
                None => {
                    let mut section = CurrencySection::new(seller.currency.clone());
                    section.lines.push(line);
                    sections.push(section);
                }
            }
        }

        // Stable: equal keys keep first-seen order.
        sections.sort_by(|a, b| a.currency.section_key().cmp(&b.currency.section_key()));
        sections
    }
}
