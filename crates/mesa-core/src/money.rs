//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $25.00 is stored as 2500 cents, summed as plain integers             │
//! │                                                                         │
//! │  The wire format stays decimal: amounts travel through the JSON API     │
//! │  as two-decimal strings ("2500.00"), never as floats                    │
//! │                                                                         │
//! │    "2500.00" ──parse──► Money(250000) ──format──► "2500.00"             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mesa_core::money::Money;
//!
//! // Create from cents (preferred in code)
//! let price = Money::from_cents(550_000); // COP 5500.00
//!
//! // Parse the wire form
//! let same: Money = "5500".parse().unwrap();
//! assert_eq!(price, same);
//!
//! // Arithmetic operations
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.to_string(), "16500.00");
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::error::MoneyError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Expense transactions and corrections can go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **String serde**: JSON carries `"2500.00"`, never a float
/// - **Transparent sqlx type**: Stored as an INTEGER column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// let price = Money::from_cents(250_000); // COP 2500.00
    /// assert_eq!(price.cents(), 250_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// Café prices are whole-peso amounts, so this is the usual
    /// constructor in fixtures and tests.
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// let price = Money::from_pesos(4500);
    /// assert_eq!(price.to_string(), "4500.00");
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-currency portion (pesos).
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.pesos(), 10);
    /// ```
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fractional portion in cents (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(550_000); // COP 5500.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 1_100_000); // COP 11000.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Cappuccino 5500.00
    /// Quantity: 2
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Subtotal: 11000.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Wire Format (decimal string)
// =============================================================================

/// Parses the decimal wire form.
///
/// Accepted: `"5500"`, `"5500.5"`, `"5500.50"`, `"-150.25"`, `".50"`.
/// Rejected: empty strings, non-digits, more than two decimal places.
impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::Empty);
        }

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match unsigned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (unsigned, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(MoneyError::Invalid(s.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyError::Invalid(s.to_string()));
        }
        if frac.len() > 2 {
            return Err(MoneyError::TooPrecise(s.to_string()));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(100))
                .ok_or_else(|| MoneyError::Invalid(s.to_string()))?
        };

        // "5500.5" means 50 cents, not 5
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| MoneyError::Invalid(s.to_string()))? * 10,
            _ => frac.parse::<i64>().map_err(|_| MoneyError::Invalid(s.to_string()))?,
        };

        let cents = whole_cents
            .checked_add(frac_cents)
            .ok_or_else(|| MoneyError::Invalid(s.to_string()))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

/// Formats as the two-decimal wire form: `"2500.00"`, `"-150.25"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (report folds).
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.pesos(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_pesos() {
        let money = Money::from_pesos(4500);
        assert_eq!(money.cents(), 450_000);
        assert_eq!(money, "4500.00".parse().unwrap());
    }

    #[test]
    fn test_parse_whole_number() {
        // Seed-style prices come without decimals
        let money: Money = "5500".parse().unwrap();
        assert_eq!(money.cents(), 550_000);
    }

    #[test]
    fn test_parse_two_decimals() {
        let money: Money = "2500.00".parse().unwrap();
        assert_eq!(money.cents(), 250_000);

        let money: Money = "150.25".parse().unwrap();
        assert_eq!(money.cents(), 15_025);
    }

    #[test]
    fn test_parse_one_decimal_means_tens_of_cents() {
        let money: Money = "5500.5".parse().unwrap();
        assert_eq!(money.cents(), 550_050);
    }

    #[test]
    fn test_parse_negative_and_bare_fraction() {
        let money: Money = "-150.25".parse().unwrap();
        assert_eq!(money.cents(), -15_025);

        let money: Money = ".50".parse().unwrap();
        assert_eq!(money.cents(), 50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(MoneyError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(MoneyError::Empty));
        assert!(matches!("abc".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!("1.2.3".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!("12,50".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!(".".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!(
            "12.345".parse::<Money>(),
            Err(MoneyError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_display_is_wire_form() {
        assert_eq!(Money::from_cents(250_000).to_string(), "2500.00");
        assert_eq!(Money::from_cents(550_050).to_string(), "5500.50");
        assert_eq!(Money::from_cents(-15_025).to_string(), "-150.25");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_parse_display_round_trip() {
        for raw in ["0.00", "2500.00", "5500.50", "-150.25", "0.05"] {
            let money: Money = raw.parse().unwrap();
            assert_eq!(money.to_string(), raw);
        }
    }

    #[test]
    fn test_serde_uses_strings() {
        let money = Money::from_cents(1_100_000);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "\"11000.00\"");

        let back: Money = serde_json::from_str("\"11000.00\"").unwrap();
        assert_eq!(back, money);

        // Numbers are not part of the wire contract
        assert!(serde_json::from_str::<Money>("11000").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(550_000);
        let line_total = unit_price.multiply_quantity(2);
        assert_eq!(line_total.cents(), 1_100_000);
    }

    #[test]
    fn test_sum() {
        let totals = vec![
            Money::from_cents(100),
            Money::from_cents(250),
            Money::from_cents(-50),
        ];
        let sum: Money = totals.iter().sum();
        assert_eq!(sum.cents(), 300);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }
}
