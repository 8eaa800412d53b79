//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, fractional allocation,
//! and Rupiah display.

use core_kernel::{Fraction, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn frac(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).unwrap()
}

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_sen() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.12));
    }

    #[test]
    fn test_from_rupiah() {
        let m = Money::from_rupiah(12_500_000);
        assert_eq!(m.amount(), dec!(12500000));
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_from_decimal() {
        let m: Money = dec!(42.5).into();
        assert_eq!(m.amount(), dec!(42.5));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_net_estate_style_subtraction() {
        let gross = Money::from_rupiah(1_000_000_000);
        let debts = Money::from_rupiah(50_000_000);
        let funeral = Money::from_rupiah(10_000_000);
        let wasiat = Money::from_rupiah(40_000_000);

        assert_eq!(gross - debts - funeral - wasiat, Money::from_rupiah(900_000_000));
    }

    #[test]
    fn test_multiply() {
        let m = Money::from_rupiah(1_000);
        assert_eq!(m.multiply(dec!(0.125)).amount(), dec!(125));
    }

    #[test]
    fn test_divide_by_zero() {
        let m = Money::from_rupiah(1_000);
        assert_eq!(m.divide(Decimal::ZERO), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_divide() {
        let m = Money::from_rupiah(1_000);
        assert_eq!(m.divide(dec!(4)).unwrap().amount(), dec!(250));
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![Money::from_rupiah(1), Money::from_rupiah(2), Money::from_rupiah(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_rupiah(6));
    }
}

mod allocation {
    use super::*;

    #[test]
    fn test_aul_allocation_is_exhaustive() {
        let m = Money::from_rupiah(1_000_000);
        let parts = m
            .allocate_by_fractions(&[frac(3, 13), frac(2, 13), frac(8, 13)])
            .unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts.into_iter().sum::<Money>(), m);
    }

    #[test]
    fn test_zero_fractions_receive_zero() {
        let m = Money::from_rupiah(1_000);
        let parts = m
            .allocate_by_fractions(&[Fraction::ONE, Fraction::ZERO])
            .unwrap();

        assert_eq!(parts[0], m);
        assert!(parts[1].is_zero());
    }

    #[test]
    fn test_partial_allocation_leaves_remainder() {
        let m = Money::from_rupiah(1_000);
        let parts = m.allocate_by_fractions(&[frac(1, 4)]).unwrap();
        assert_eq!(parts[0].amount(), dec!(250));
    }

    #[test]
    fn test_negative_fraction_rejected() {
        let m = Money::from_rupiah(1_000);
        let result = m.allocate_by_fractions(&[frac(-1, 4)]);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_rupiah_format() {
        assert_eq!(Money::from_rupiah(300_000_000).to_string(), "Rp 300.000.000");
    }
}
