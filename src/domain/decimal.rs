//! Exact decimal quantity used for grams, prices and balances.
//!
//! Backed by rust_decimal so purity coefficients such as 0.925 multiply
//! without binary floating-point drift.

use rust_decimal::Decimal as RustDecimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lossless decimal numeric type for ledger arithmetic.
///
/// Serializes to a JSON number.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::float")] RustDecimal);

impl Decimal {
    pub fn new(value: RustDecimal) -> Self {
        Decimal(value)
    }

    /// Parse a decimal from its canonical textual form (`.` separator).
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Decimal)
    }

    /// Parse user-entered numbers: trims whitespace and accepts a comma as
    /// the decimal separator (`"12,5"` parses as 12.5).
    pub fn parse_lenient(s: &str) -> Result<Self, rust_decimal::Error> {
        let normalized = s.trim().replace(',', ".");
        RustDecimal::from_str(&normalized)
            .or_else(|_| RustDecimal::from_scientific(&normalized))
            .map(Decimal)
    }

    /// Canonical string without trailing zeros or exponent notation.
    pub fn to_canonical_string(&self) -> String {
        format!("{}", self.0.normalize())
    }

    /// Fixed-point rendering rounded half away from zero, as printed on
    /// statements (`3` places for grams, `2` for money).
    pub fn to_fixed(&self, places: u32) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        // avoid printing "-0.00"
        let rounded = if rounded.is_zero() {
            RustDecimal::ZERO
        } else {
            rounded
        };
        format!("{:.*}", places as usize, rounded)
    }

    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    pub fn zero() -> Self {
        Decimal(RustDecimal::ZERO)
    }

    pub fn one() -> Self {
        Decimal(RustDecimal::ONE)
    }

    pub fn abs(&self) -> Self {
        Decimal(self.0.abs())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is < 0.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<RustDecimal> for Decimal {
    fn from(value: RustDecimal) -> Self {
        Decimal(value)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal(RustDecimal::from(value))
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal(RustDecimal::from(value))
    }
}

impl From<Decimal> for RustDecimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl std::ops::Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        Decimal(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Decimal) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        Decimal(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        Decimal(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-self.0)
    }
}

impl std::iter::Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::zero(), |acc, d| acc + d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_purity_product_is_exact() {
        assert_eq!(d("4") * d("0.925"), d("3.7"));
        assert_eq!((d("4") * d("0.925")).to_canonical_string(), "3.7");
    }

    #[test]
    fn test_parse_lenient_accepts_comma_separator() {
        assert_eq!(Decimal::parse_lenient(" 12,5 ").unwrap(), d("12.5"));
        assert_eq!(Decimal::parse_lenient("7").unwrap(), d("7"));
        assert!(Decimal::parse_lenient("abc").is_err());
        assert!(Decimal::parse_lenient("").is_err());
    }

    #[test]
    fn test_to_fixed_pads_and_rounds() {
        assert_eq!(d("10").to_fixed(3), "10.000");
        assert_eq!(d("-3.7").to_fixed(3), "-3.700");
        assert_eq!(d("2.345").to_fixed(2), "2.35");
        assert_eq!(d("-2.345").to_fixed(2), "-2.35");
        assert_eq!(Decimal::zero().to_fixed(2), "0.00");
    }

    #[test]
    fn test_canonical_strips_trailing_zeros() {
        assert_eq!(d("50.000").to_canonical_string(), "50");
        assert_eq!(d("0.9250").to_string(), "0.925");
    }

    #[test]
    fn test_sum_and_add_assign() {
        let total: Decimal = vec![d("1.5"), d("2.5"), d("-1")].into_iter().sum();
        assert_eq!(total, d("3"));

        let mut acc = Decimal::zero();
        acc += d("0.1");
        acc += d("0.2");
        assert_eq!(acc, d("0.3"));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(d("-0.001").is_negative());
        assert!(!d("0").is_negative());
        assert!(d("0.000").is_zero());
    }

    #[test]
    fn test_json_serializes_as_number() {
        let json = serde_json::to_value(d("123.456")).unwrap();
        assert!(json.is_number());
        assert_eq!(json.to_string(), "123.456");
    }
}
