//! Exact rational numbers for inheritance shares
//!
//! Legal shares are fractions such as 1/8, 2/3 or (after Aul) 3/13. Keeping
//! them as reduced rationals means share tables add up to exactly one and the
//! conversion to decimal happens only once, when amounts are allocated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during fraction operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FractionError {
    #[error("Denominator cannot be zero")]
    ZeroDenominator,

    #[error("Overflow during fraction arithmetic")]
    Overflow,

    #[error("Cannot parse fraction: {0}")]
    Parse(String),
}

/// A reduced rational number with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numerator: 0, denominator: 1 };
    pub const ONE: Fraction = Fraction { numerator: 1, denominator: 1 };

    /// Creates a fraction, reducing it to lowest terms
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    /// Creates a whole-number fraction
    pub fn from_integer(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }

    fn from_wide(numerator: i128, denominator: i128) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        let sign = if denominator < 0 { -1 } else { 1 };
        let divisor = gcd(numerator.abs(), denominator.abs()).max(1);
        let numerator = sign * numerator / divisor;
        let denominator = denominator.abs() / divisor;

        Ok(Self {
            numerator: i64::try_from(numerator).map_err(|_| FractionError::Overflow)?,
            denominator: i64::try_from(denominator).map_err(|_| FractionError::Overflow)?,
        })
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    pub fn checked_add(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        let (a, b) = (self.wide(), other.wide());
        Self::from_wide(a.0 * b.1 + b.0 * a.1, a.1 * b.1)
    }

    pub fn checked_sub(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        let (a, b) = (self.wide(), other.wide());
        Self::from_wide(a.0 * b.1 - b.0 * a.1, a.1 * b.1)
    }

    pub fn checked_mul(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        let (a, b) = (self.wide(), other.wide());
        Self::from_wide(a.0 * b.0, a.1 * b.1)
    }

    pub fn checked_div(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        let (a, b) = (self.wide(), other.wide());
        Self::from_wide(a.0 * b.1, a.1 * b.0)
    }

    /// Multiplies by a whole number (e.g. a per-person share times a head count)
    pub fn times(&self, factor: i64) -> Fraction {
        *self * Fraction::from_integer(factor)
    }

    /// Divides by a whole number (e.g. a group share split per head)
    pub fn split(&self, parts: i64) -> Result<Fraction, FractionError> {
        self.checked_div(&Fraction::from_integer(parts))
    }

    /// Returns the value as a decimal
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }

    /// Returns the value as a percentage rounded to the given decimal places
    pub fn as_percentage(&self, dp: u32) -> Decimal {
        (Decimal::from(self.numerator) * Decimal::ONE_HUNDRED / Decimal::from(self.denominator))
            .round_dp(dp)
    }

    fn wide(&self) -> (i128, i128) {
        (self.numerator as i128, self.denominator as i128)
    }
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| FractionError::Parse(s.to_string()))
        };
        match s.split_once('/') {
            Some((num, den)) => Fraction::new(parse(num)?, parse(den)?),
            None => Ok(Fraction::from_integer(parse(s)?)),
        }
    }
}

impl TryFrom<String> for Fraction {
    type Error = FractionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Fraction> for String {
    fn from(value: Fraction) -> String {
        value.to_string()
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.wide(), other.wide());
        (a.0 * b.1).cmp(&(b.0 * a.1))
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other).expect("Overflow in Fraction::add")
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other).expect("Overflow in Fraction::sub")
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.checked_mul(&other).expect("Overflow in Fraction::mul")
    }
}

impl Div for Fraction {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self.checked_div(&other).expect("Division by zero in Fraction::div")
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ZERO, |acc, f| acc + f)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_reduces_to_lowest_terms() {
        let f = frac(6, 8);
        assert_eq!(f.numerator(), 3);
        assert_eq!(f.denominator(), 4);
    }

    #[test]
    fn test_negative_denominator_normalized() {
        let f = frac(1, -2);
        assert_eq!(f.numerator(), -1);
        assert_eq!(f.denominator(), 2);
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert_eq!(Fraction::new(1, 0), Err(FractionError::ZeroDenominator));
    }

    #[test]
    fn test_faraid_table_sums() {
        // husband 1/4, mother 1/6, two daughters 2/3
        let total = frac(1, 4) + frac(1, 6) + frac(2, 3);
        assert_eq!(total, frac(13, 12));
        assert!(total > Fraction::ONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(1, 2).to_string(), "1/2");
        assert_eq!(frac(4, 4).to_string(), "1");
        assert_eq!(Fraction::ZERO.to_string(), "0");
    }

    #[test]
    fn test_parse() {
        assert_eq!("3/13".parse::<Fraction>().unwrap(), frac(3, 13));
        assert_eq!("2".parse::<Fraction>().unwrap(), Fraction::from_integer(2));
        assert!("a/b".parse::<Fraction>().is_err());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(frac(1, 3).as_percentage(2), dec!(33.33));
        assert_eq!(frac(1, 8).as_percentage(4), dec!(12.5));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&frac(2, 3)).unwrap();
        assert_eq!(json, "\"2/3\"");
        let back: Fraction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frac(2, 3));
    }
}
