//! Copy-store: overwrite one store's offers with another's.
//!
//! 1. List the stores the requester owns (sorted by name)
//! 2. Validate the (source, target) selection, else return the listing
//! 3. Ask for confirmation; a decline leaves everything untouched
//! 4. Re-check full access on the target
//! 5. Build the complete replacement, then swap it in with one assignment

use chrono::Utc;
use tradescout_types::{
    AccessLevel, Authorizer, CopyCounts, CopyKind, CopyReceipt, GatedEntity, MarketRegistry,
    OfferCategory, OfferSide, Result, StoreConfig, TradescoutError, UserId,
};

use crate::confirm::Confirmer;
use crate::listing::{Selection, listing, owned_sellers};
use crate::outcome::CopyOutcome;

/// Operation name used in cancellation messages.
pub const COPY_STORE: &str = "CopyStore";

/// Copy every buy and sell offer from the `source`-th to the `target`-th
/// owned store.
///
/// # Errors
/// - [`TradescoutError::NoOwnedEntities`]: the requester owns no store.
/// - [`TradescoutError::OperationCancelled`]: the confirmation was declined.
/// - [`TradescoutError::Unauthorized`]: full access on the target is missing.
/// - [`TradescoutError::SellerNotFound`]: the target vanished from the registry.
pub fn copy_store<R, A, C>(
    registry: &mut R,
    authorizer: &A,
    requester: UserId,
    source: Option<i64>,
    target: Option<i64>,
    confirmer: &mut C,
) -> Result<CopyOutcome>
where
    R: MarketRegistry,
    A: Authorizer + ?Sized,
    C: Confirmer + ?Sized,
{
    let owned = owned_sellers(&*registry, authorizer, requester);
    if owned.is_empty() {
        tracing::debug!(requester = %requester, "Requester owns no store");
        return Err(TradescoutError::NoOwnedEntities {
            kind: "stores".to_string(),
        });
    }

    let Some(selection) = Selection::resolve(source, target, owned.len()) else {
        return Ok(CopyOutcome::Listing(listing(owned.iter().map(|s| s.name.as_str()))));
    };

    let from = owned[selection.source];
    let to = owned[selection.target];
    let (source_name, target_name, target_id) = (from.name.clone(), to.name.clone(), to.id);
    let replacement = duplicate_store_config(&from.store);

    let prompt = format!(
        "Do you really want to copy {source_name} to {target_name} and overwrite all tradeoffers?"
    );
    if !confirmer.confirm(&prompt) {
        tracing::debug!(source = %source_name, target = %target_name, "Store copy declined");
        return Err(TradescoutError::OperationCancelled {
            operation: COPY_STORE.to_string(),
        });
    }

    let target_seller = registry
        .seller(target_id)
        .ok_or(TradescoutError::SellerNotFound(target_id))?;
    if !authorizer.is_authorized(
        GatedEntity::Seller(target_seller),
        requester,
        AccessLevel::FullAccess,
    ) {
        tracing::warn!(
            target = %target_name,
            requester = %requester,
            "Refusing store copy without full access on target"
        );
        return Err(TradescoutError::Unauthorized {
            reason: format!("no full access on store {target_name}"),
        });
    }

    let counts = CopyCounts::Store {
        buy_offers: replacement.offer_count(OfferSide::Buy),
        sell_offers: replacement.offer_count(OfferSide::Sell),
    };
    registry.replace_store_config(target_id, replacement)?;

    tracing::info!(
        source = %source_name,
        target = %target_name,
        ?counts,
        "Store offers copied"
    );
    Ok(CopyOutcome::Copied(CopyReceipt {
        kind: CopyKind::Store,
        source: source_name,
        target: target_name,
        counts,
        copied_at: Utc::now(),
    }))
}

/// Fresh categories holding fresh offers: item, durability bounds, price
/// and limit are carried over one by one.
fn duplicate_store_config(source: &StoreConfig) -> StoreConfig {
    let duplicate = |categories: &[OfferCategory]| -> Vec<OfferCategory> {
        categories
            .iter()
            .map(|category| OfferCategory {
                name: category.name.clone(),
                offers: category.offers.to_vec(),
            })
            .collect()
    };
    StoreConfig {
        buy_categories: duplicate(&source.buy_categories),
        sell_categories: duplicate(&source.sell_categories),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use tradescout_types::*;

    use super::*;
    use crate::confirm::FixedAnswer;

    fn stocked_store(owner: UserId, name: &str) -> Seller {
        let mut seller = Seller::new(name, Currency::minted("Gold"), AccessList::public(owner))
            .with_buy_offer(TradeOffer::new(ItemTypeId(1), Decimal::new(2, 0)).with_limit(10))
            .with_buy_offer(TradeOffer::new(ItemTypeId(2), Decimal::new(5, 1)));
        seller.store.sell_categories.push(
            OfferCategory::new("Selling").with_offer(TradeOffer::new(ItemTypeId(3), Decimal::TEN)),
        );
        seller
    }

    #[test]
    fn duplicate_preserves_structure() {
        let store = stocked_store(UserId::new(), "A").store;
        assert_eq!(duplicate_store_config(&store), store);
    }

    #[test]
    fn copies_and_counts() {
        let owner = UserId::new();
        let mut world = World {
            sellers: vec![
                stocked_store(owner, "Source"),
                Seller::new("Target", Currency::minted("Gold"), AccessList::public(owner)),
            ],
            ..World::default()
        };
        // sorted: 0 = Source, 1 = Target
        let outcome = copy_store(
            &mut world,
            &AccessListAuthorizer,
            owner,
            Some(0),
            Some(1),
            &mut FixedAnswer(true),
        )
        .unwrap();

        let receipt = outcome.receipt().unwrap();
        assert_eq!(
            receipt.counts,
            CopyCounts::Store {
                buy_offers: 2,
                sell_offers: 1
            }
        );
        assert_eq!(receipt.summary(), "Copied 1 sell and 2 buy offers successfully.");
        assert_eq!(world.sellers[1].store, world.sellers[0].store);
    }

    #[test]
    fn decline_leaves_target_untouched() {
        let owner = UserId::new();
        let target = stocked_store(owner, "Target");
        let before = target.store.clone();
        let mut world = World {
            sellers: vec![Seller::new("Source", Currency::minted("Gold"), AccessList::public(owner)), target],
            ..World::default()
        };
        let err = copy_store(
            &mut world,
            &AccessListAuthorizer,
            owner,
            Some(0),
            Some(1),
            &mut FixedAnswer(false),
        )
        .unwrap_err();
        assert!(matches!(err, TradescoutError::OperationCancelled { ref operation } if operation == COPY_STORE));
        assert_eq!(world.sellers[1].store, before);
    }

    #[test]
    fn invalid_selection_lists_without_asking() {
        let owner = UserId::new();
        let mut world = World {
            sellers: vec![stocked_store(owner, "B"), stocked_store(owner, "A")],
            ..World::default()
        };
        let mut asked = false;
        let mut confirmer = |_: &str| {
            asked = true;
            true
        };
        let outcome =
            copy_store(&mut world, &AccessListAuthorizer, owner, Some(1), Some(1), &mut confirmer)
                .unwrap();
        assert!(!asked);
        match outcome {
            CopyOutcome::Listing(entries) => {
                let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
                assert_eq!(names, vec!["A", "B"]);
            }
            CopyOutcome::Copied(_) => panic!("expected listing"),
        }
    }

    #[test]
    fn no_owned_store() {
        let mut world = World::default();
        let err = copy_store(
            &mut world,
            &AccessListAuthorizer,
            UserId::new(),
            None,
            None,
            &mut FixedAnswer(true),
        )
        .unwrap_err();
        assert!(matches!(err, TradescoutError::NoOwnedEntities { .. }));
    }
}
