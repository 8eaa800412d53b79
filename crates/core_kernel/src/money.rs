//! Money types with precise decimal arithmetic
//!
//! All estate figures are Indonesian Rupiah. Amounts use rust_decimal for
//! precise calculations without floating-point errors and are kept to sen
//! (two decimal places); whole-Rupiah rounding happens only for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

use crate::format::format_currency;
use crate::fraction::Fraction;

/// Decimal places kept for Rupiah amounts (sen)
pub const RUPIAH_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A Rupiah amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value rounded to sen
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(RUPIAH_DECIMAL_PLACES),
        }
    }

    /// Creates Money from a whole-Rupiah amount
    pub fn from_rupiah(rupiah: i64) -> Self {
        Self::new(Decimal::from(rupiah))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: Decimal::ZERO }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Clamps a negative amount to zero
    pub fn floor_at_zero(&self) -> Self {
        if self.is_negative() {
            Self::zero()
        } else {
            *self
        }
    }

    /// Multiplies by a scalar
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor)
    }

    /// Returns the given fraction of this amount
    pub fn portion(&self, fraction: &Fraction) -> Self {
        Self::new(self.amount * Decimal::from(fraction.numerator()) / Decimal::from(fraction.denominator()))
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount / divisor))
    }

    /// Allocates money according to given fractions
    ///
    /// Each allocation is rounded to sen. When the fractions sum to exactly
    /// one, the last non-zero allocation absorbs the rounding remainder so the
    /// allocations sum to the original amount. Returns allocations in the same
    /// order as the fractions.
    pub fn allocate_by_fractions(&self, fractions: &[Fraction]) -> Result<Vec<Money>, MoneyError> {
        if fractions.iter().any(Fraction::is_negative) {
            return Err(MoneyError::InvalidAmount("Negative fraction".to_string()));
        }

        let mut allocations: Vec<Money> = fractions.iter().map(|f| self.portion(f)).collect();

        let total: Fraction = fractions.iter().sum();
        if total == Fraction::ONE {
            if let Some(last) = fractions.iter().rposition(Fraction::is_positive) {
                let others: Money = allocations
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != last)
                    .map(|(_, m)| *m)
                    .sum();
                allocations[last] = *self - others;
            }
        }

        Ok(allocations)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_currency(self.amount))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.amount - other.amount)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}
