//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::fraction::{Fraction, FractionError};
use core_kernel::money::MoneyError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_from_money_error() {
    let core_error: CoreError = MoneyError::DivisionByZero.into();

    assert!(matches!(core_error, CoreError::Money(MoneyError::DivisionByZero)));
}

#[test]
fn test_core_error_from_fraction_error() {
    let fraction_error = Fraction::new(1, 0).unwrap_err();
    let core_error: CoreError = fraction_error.into();

    assert!(matches!(core_error, CoreError::Fraction(FractionError::ZeroDenominator)));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}
