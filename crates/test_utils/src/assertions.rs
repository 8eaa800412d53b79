//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for calculation results that give
//! more meaningful error messages than standard assertions.

use core_kernel::{Fraction, Money};
use domain_inheritance::{HeirRelation, InheritanceResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tolerance for percentage sums, in percentage points
pub const PERCENTAGE_TOLERANCE: Decimal = dec!(0.01);

/// Asserts that the share percentages sum to 100% within tolerance
///
/// # Panics
///
/// Panics with the per-heir breakdown if the sum is off
pub fn assert_percentages_sum_to_100(result: &InheritanceResult) {
    let total = result.total_percentage();
    let diff = (total - dec!(100)).abs();
    assert!(
        diff <= PERCENTAGE_TOLERANCE,
        "Percentages sum to {} instead of 100: {:?}",
        total,
        result
            .shares
            .iter()
            .map(|s| (s.heir.relation, s.percentage))
            .collect::<Vec<_>>()
    );
}

/// Asserts that the shares sum to exactly one as fractions
pub fn assert_fractions_sum_to_one(result: &InheritanceResult) {
    assert_eq!(
        result.total_fraction(),
        Fraction::ONE,
        "Fractions do not sum to one"
    );
}

/// Asserts that every amount equals the net estate times its fraction and
/// that the amounts sum to the net estate
///
/// Rounding allows one sen per share, since the last share absorbs the
/// remainder of all the others.
pub fn assert_amounts_consistent(result: &InheritanceResult) {
    let net = result.net_estate;
    let tolerance = dec!(0.01) * Decimal::from(result.shares.len().max(1) as u64);
    for share in &result.shares {
        let expected = net.portion(&share.fraction);
        let diff = (share.amount.amount() - expected.amount()).abs();
        assert!(
            diff <= tolerance,
            "Amount {} for {:?} differs from {} x {} = {}",
            share.amount,
            share.heir.relation,
            net,
            share.fraction,
            expected
        );
    }

    if result.total_fraction() == Fraction::ONE {
        assert_eq!(
            result.total_allocated(),
            net,
            "Allocated amounts do not sum to the net estate"
        );
    }
}

/// Asserts the combined fraction of every entry with the given relation
pub fn assert_share_fraction(
    result: &InheritanceResult,
    relation: HeirRelation,
    numerator: i64,
    denominator: i64,
) {
    let expected = Fraction::new(numerator, denominator)
        .unwrap_or_else(|e| panic!("Invalid expected fraction: {}", e));
    assert_eq!(
        result.fraction_for(relation),
        expected,
        "Unexpected fraction for {:?}",
        relation
    );
}

/// Asserts the combined amount of every entry with the given relation
pub fn assert_share_amount(result: &InheritanceResult, relation: HeirRelation, rupiah: i64) {
    let actual: Money = result.shares_for(relation).map(|s| s.amount).sum();
    assert_eq!(
        actual,
        Money::from_rupiah(rupiah),
        "Unexpected amount for {:?}",
        relation
    );
}

/// Asserts that an entire relation group received nothing
pub fn assert_blocked(result: &InheritanceResult, relation: HeirRelation) {
    assert!(
        result.shares_for(relation).all(|s| s.fraction.is_zero()),
        "Expected {:?} to receive nothing, got {}",
        relation,
        result.fraction_for(relation)
    );
}
