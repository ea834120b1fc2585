//! Seller directory: every seller the requester could sell to right now.

use tradescout_types::{AccessLevel, Authorizer, GatedEntity, MarketView, Seller, UserId};

/// Sellers that are switched on and grant `requester` consumer access,
/// in the world's enumeration order.
///
/// An empty result is not an error here; the caller reports it.
pub fn eligible_sellers<'w, W, A>(world: &'w W, authorizer: &A, requester: UserId) -> Vec<&'w Seller>
where
    W: MarketView,
    A: Authorizer + ?Sized,
{
    world
        .sellers()
        .filter(|seller| {
            if !seller.active {
                tracing::debug!(seller = %seller.name, "Skipping inactive seller");
                return false;
            }
            if !authorizer.is_authorized(GatedEntity::Seller(seller), requester, AccessLevel::Consumer) {
                tracing::debug!(
                    seller = %seller.name,
                    requester = %requester,
                    "Skipping seller without consumer access"
                );
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tradescout_types::*;

    use super::*;

    fn gold() -> Currency {
        Currency::minted("Gold")
    }

    #[test]
    fn filters_inactive_and_unauthorized() {
        let requester = UserId::new();
        let private = Seller::new("Private", gold(), AccessList::default());
        let world = World {
            items: Vec::new(),
            sellers: vec![
                Seller::dummy("Open", gold(), 1),
                Seller::dummy("Closed", gold(), 1).deactivated(),
                private,
            ],
            exchanges: Vec::new(),
        };

        let eligible = eligible_sellers(&world, &AccessListAuthorizer, requester);
        let names: Vec<&str> = eligible.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Open"]);
    }

    #[test]
    fn explicit_consumer_is_admitted() {
        let requester = UserId::new();
        let seller = Seller::new(
            "Members Only",
            gold(),
            AccessList {
                consumers: vec![requester],
                ..AccessList::default()
            },
        );
        let world = World {
            sellers: vec![seller],
            ..World::default()
        };
        assert_eq!(eligible_sellers(&world, &AccessListAuthorizer, requester).len(), 1);
        assert!(eligible_sellers(&world, &AccessListAuthorizer, UserId::new()).is_empty());
    }

    struct DenyAll;

    impl Authorizer for DenyAll {
        fn is_authorized(&self, _: GatedEntity<'_>, _: UserId, _: AccessLevel) -> bool {
            false
        }
    }

    #[test]
    fn injected_authorizer_is_consulted() {
        let world = World {
            sellers: vec![Seller::dummy("Open", gold(), 1)],
            ..World::default()
        };
        assert!(eligible_sellers(&world, &DenyAll, UserId::new()).is_empty());
    }

    #[test]
    fn keeps_enumeration_order() {
        let world = World {
            sellers: vec![
                Seller::dummy("Zeta", gold(), 1),
                Seller::dummy("Alpha", gold(), 1),
                Seller::dummy("Mid", gold(), 1),
            ],
            ..World::default()
        };
        let names: Vec<&str> = eligible_sellers(&world, &AccessListAuthorizer, UserId::new())
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }
}
