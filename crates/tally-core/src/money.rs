//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All monetary values are integers in the smallest currency unit. Prices
//! and quantities in this domain are integer-valued, so every revenue
//! figure the pipeline produces is exact.
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! // Create from smallest currency units
//! let price = Money::from_units(20_000);
//!
//! // Arithmetic operations
//! let line = price * 3;                       // quantity multiplication
//! let total = line + Money::from_units(500);
//! assert_eq!(total.units(), 60_500);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// Every revenue and spending figure in the pipeline flows through this
/// type: item prices, line revenue, per-category revenue, buyer spending,
/// and the summary's total revenue.
///
/// Serializes as a bare number, matching the summary's output shape.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from smallest currency units.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_units(15_000);
    /// assert_eq!(price.units(), 15_000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in smallest currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a quantity, yielding line revenue.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_units(15_000);
    /// let line_revenue = unit_price.multiply_quantity(100);
    /// assert_eq!(line_revenue.units(), 1_500_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the raw amount in smallest units.
///
/// This is for logs and debugging; presentation-layer formatting
/// (currency symbols, separators) belongs to the caller.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
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

/// Addition assignment (+=), used by the fold's accumulators.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
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

/// Summation over iterators of Money (total revenue derivation).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(20_000);
        assert_eq!(money.units(), 20_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(20_000)), "20000");
        assert_eq!(format!("{}", Money::zero()), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1_000);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 1_500);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.units(), 1_500);

        let result: Money = a * 3;
        assert_eq!(result.units(), 3_000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_units(15_000);
        assert_eq!(unit_price.multiply_quantity(100).units(), 1_500_000);
        assert_eq!(unit_price.multiply_quantity(1).units(), 15_000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 2_000, 30_000]
            .into_iter()
            .map(Money::from_units)
            .sum();
        assert_eq!(total.units(), 32_100);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_default() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_value(Money::from_units(1_660_000)).unwrap();
        assert_eq!(json, serde_json::json!(1_660_000));
    }
}
