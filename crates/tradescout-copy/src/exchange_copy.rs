//! Copy-exchange: overwrite one exchange's rate and holding tables with
//! another's. Same shape as copy-store, over exchanges the requester has
//! full access to.

use chrono::Utc;
use tradescout_types::{
    AccessLevel, Authorizer, CopyCounts, CopyKind, CopyReceipt, ExchangeConfig, GatedEntity,
    MarketRegistry, Result, TradescoutError, UserId,
};

use crate::confirm::Confirmer;
use crate::listing::{Selection, listing, manageable_exchanges};
use crate::outcome::CopyOutcome;

/// Operation name used in cancellation messages.
pub const COPY_EXCHANGE: &str = "CopyExchange";

/// Copy rates and holding limits from the `source`-th to the `target`-th
/// manageable exchange.
///
/// # Errors
/// - [`TradescoutError::NoOwnedEntities`]: no exchange grants full access.
/// - [`TradescoutError::OperationCancelled`]: the confirmation was declined.
/// - [`TradescoutError::Unauthorized`]: full access on the target is missing.
/// - [`TradescoutError::ExchangeNotFound`]: the target vanished from the registry.
pub fn copy_exchange<R, A, C>(
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
    let manageable = manageable_exchanges(&*registry, authorizer, requester);
    if manageable.is_empty() {
        tracing::debug!(requester = %requester, "Requester manages no exchange");
        return Err(TradescoutError::NoOwnedEntities {
            kind: "exchange".to_string(),
        });
    }

    let Some(selection) = Selection::resolve(source, target, manageable.len()) else {
        return Ok(CopyOutcome::Listing(listing(
            manageable.iter().map(|e| e.name.as_str()),
        )));
    };

    let from = manageable[selection.source];
    let to = manageable[selection.target];
    let (source_name, target_name, target_id) = (from.name.clone(), to.name.clone(), to.id);
    let replacement = ExchangeConfig {
        rates: from.config.rates.clone(),
        holdings: from.config.holdings.clone(),
    };

    let prompt = format!(
        "Do you really want to copy {source_name} to {target_name} and overwrite all exchanges and holdings?"
    );
    if !confirmer.confirm(&prompt) {
        tracing::debug!(source = %source_name, target = %target_name, "Exchange copy declined");
        return Err(TradescoutError::OperationCancelled {
            operation: COPY_EXCHANGE.to_string(),
        });
    }

    let target_exchange = registry
        .exchange(target_id)
        .ok_or(TradescoutError::ExchangeNotFound(target_id))?;
    if !authorizer.is_authorized(
        GatedEntity::Exchange(target_exchange),
        requester,
        AccessLevel::FullAccess,
    ) {
        tracing::warn!(
            target = %target_name,
            requester = %requester,
            "Refusing exchange copy without full access on target"
        );
        return Err(TradescoutError::Unauthorized {
            reason: format!("no full access on exchange {target_name}"),
        });
    }

    let counts = CopyCounts::Exchange {
        rates: replacement.rates.len(),
        holdings: replacement.holdings.len(),
    };
    registry.replace_exchange_config(target_id, replacement)?;

    tracing::info!(
        source = %source_name,
        target = %target_name,
        ?counts,
        "Exchange tables copied"
    );
    Ok(CopyOutcome::Copied(CopyReceipt {
        kind: CopyKind::Exchange,
        source: source_name,
        target: target_name,
        counts,
        copied_at: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use tradescout_types::*;

    use super::*;
    use crate::confirm::FixedAnswer;

    fn bank(owner: UserId, name: &str) -> Exchange {
        Exchange::new(name, AccessList::public(owner))
            .with_rate(Currency::minted("Gold"), Currency::minted("Silver"), Decimal::TWO)
            .with_rate(Currency::minted("Copper"), Currency::minted("Silver"), Decimal::new(5, 1))
            .with_holding_limit(Currency::minted("Gold"), Decimal::ZERO, Decimal::new(1_000, 0))
    }

    #[test]
    fn copies_tables() {
        let owner = UserId::new();
        let mut world = World {
            exchanges: vec![bank(owner, "Central"), Exchange::new("Branch", AccessList::public(owner))],
            ..World::default()
        };
        // sorted: 0 = Branch, 1 = Central
        let outcome = copy_exchange(
            &mut world,
            &AccessListAuthorizer,
            owner,
            Some(1),
            Some(0),
            &mut FixedAnswer(true),
        )
        .unwrap();
        assert_eq!(
            outcome.receipt().unwrap().counts,
            CopyCounts::Exchange {
                rates: 2,
                holdings: 1
            }
        );
        assert_eq!(world.exchanges[1].config, world.exchanges[0].config);
    }

    #[test]
    fn decline_keeps_target() {
        let owner = UserId::new();
        let mut world = World {
            exchanges: vec![bank(owner, "Central"), Exchange::new("Branch", AccessList::public(owner))],
            ..World::default()
        };
        let mut prompts = Vec::new();
        let mut confirmer = |prompt: &str| {
            prompts.push(prompt.to_string());
            false
        };
        let err = copy_exchange(&mut world, &AccessListAuthorizer, owner, Some(1), Some(0), &mut confirmer)
            .unwrap_err();
        assert!(matches!(err, TradescoutError::OperationCancelled { ref operation } if operation == COPY_EXCHANGE));
        assert_eq!(world.exchanges[1].config, ExchangeConfig::default());
        assert_eq!(
            prompts,
            vec![
                "Do you really want to copy Central to Branch and overwrite all exchanges and holdings?"
                    .to_string()
            ]
        );
    }

    #[test]
    fn consumer_only_exchange_is_not_listed() {
        let me = UserId::new();
        let mut world = World {
            exchanges: vec![Exchange::new(
                "Public",
                AccessList {
                    consumers: vec![me],
                    ..AccessList::default()
                },
            )],
            ..World::default()
        };
        let err = copy_exchange(&mut world, &AccessListAuthorizer, me, None, None, &mut FixedAnswer(true))
            .unwrap_err();
        assert!(matches!(err, TradescoutError::NoOwnedEntities { ref kind } if kind == "exchange"));
    }
}
