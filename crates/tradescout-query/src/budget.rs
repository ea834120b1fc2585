//! Budget calculation: how many units a seller's funds cover at a price.
//!
//! Every "unlimited or undefined" case is clamped to the caller's sentinel
//! right here, so only finite integers leave this module.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tradescout_types::Holding;

/// `floor(balance / price)`, clamped into `0..=u64::MAX`.
///
/// Returns `sentinel` when:
/// - the holding is [`Holding::Unlimited`],
/// - the price is zero or negative (the quotient is undefined),
/// - the quotient does not fit in a `u64`.
///
/// A zero or negative balance affords nothing.
#[must_use]
pub fn affordable_quantity(funds: Holding, price: Decimal, sentinel: u64) -> u64 {
    let balance = match funds {
        Holding::Unlimited => return sentinel,
        Holding::Finite(balance) => balance,
    };
    if price <= Decimal::ZERO {
        return sentinel;
    }
    if balance <= Decimal::ZERO {
        return 0;
    }
    balance
        .checked_div(price)
        .and_then(|quotient| quotient.floor().to_u64())
        .unwrap_or(sentinel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finite(n: i64, scale: u32) -> Holding {
        Holding::Finite(Decimal::new(n, scale))
    }

    #[test]
    fn floors_the_quotient() {
        assert_eq!(affordable_quantity(finite(100, 0), Decimal::new(3, 0), 999), 33);
        assert_eq!(affordable_quantity(finite(1, 0), Decimal::new(3, 0), 999), 0);
    }

    #[test]
    fn fractional_prices() {
        // 10.00 / 0.25 = 40
        assert_eq!(affordable_quantity(finite(1000, 2), Decimal::new(25, 2), 999), 40);
    }

    #[test]
    fn unlimited_funds_hit_sentinel() {
        assert_eq!(affordable_quantity(Holding::Unlimited, Decimal::ONE, 999), 999);
        assert_eq!(affordable_quantity(Holding::Unlimited, Decimal::ONE, 42), 42);
    }

    #[test]
    fn non_positive_price_is_unconstrained() {
        assert_eq!(affordable_quantity(finite(5, 0), Decimal::ZERO, 999), 999);
        assert_eq!(affordable_quantity(finite(5, 0), Decimal::NEGATIVE_ONE, 999), 999);
    }

    #[test]
    fn negative_balance_affords_nothing() {
        assert_eq!(affordable_quantity(finite(-50, 0), Decimal::ONE, 999), 0);
        assert_eq!(affordable_quantity(finite(0, 0), Decimal::ONE, 999), 0);
    }

    #[test]
    fn huge_quotient_is_clamped() {
        let tiny_price = Decimal::new(1, 20);
        assert_eq!(affordable_quantity(Holding::Finite(Decimal::MAX), tiny_price, 999), 999);
    }

    #[test]
    fn large_but_finite_is_not_clamped() {
        assert_eq!(
            affordable_quantity(finite(1_000_000, 0), Decimal::ONE, 999),
            1_000_000
        );
    }
}
