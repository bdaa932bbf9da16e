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
//! │  The original quoting sheets summed float costs and the same design     │
//! │  could quote a cent apart depending on which screen computed it.        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every rate in the price list and every cost component is i64 cents.  │
//! │    Physical inputs (cm, stitches) stay floats; they cross into money    │
//! │    exactly once, through commercial rounding.                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commercial Rounding
//! Embroidery pricing never quotes fractional cents. Every cost component is
//! rounded *up* to a fixed increment (5 cents) before components are summed.
//! Rounding each component first is deliberate: summing raw values and
//! rounding once yields different totals, and the shop's printed breakdowns
//! must add up to the quoted unit price line by line.
//!
//! ## Usage
//! ```rust
//! use stitchquote_core::money::Money;
//! use stitchquote_core::COMMERCIAL_INCREMENT;
//!
//! // Create from cents (preferred)
//! let backing = Money::from_cents(15); // 0.15
//!
//! // Physical → money boundary: 11.4 raw cents rounds up to the 5-cent grid
//! let rounded = Money::round_up_to(11.4, COMMERCIAL_INCREMENT);
//! assert_eq!(rounded.cents(), 15);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// PricingConfig rates ──► cost components (stitching, backing, fabric,
///                         cutting, sublimation)
///                              │
///                              ▼
///                      CostBreakdown ──► unit price ──► Quotation totals
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stitchquote_core::money::Money;
    ///
    /// let rate = Money::from_cents(150); // 1.50 per thousand stitches
    /// assert_eq!(rate.cents(), 150);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use stitchquote_core::money::Money;
    ///
    /// let roll = Money::from_major_minor(300, 0); // 300.00 per backing roll
    /// assert_eq!(roll.cents(), 30000);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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

    /// Rounds a raw fractional-cent amount *up* to a fixed increment.
    ///
    /// This is the single boundary where physical math (areas in cm²,
    /// stitch counts, roll ratios; all f64) becomes money. The raw value
    /// is first rounded to whole cents, then lifted to the next multiple
    /// of `increment`.
    ///
    /// Non-positive raw values collapse to zero: cost components are never
    /// negative, and a zero-rate config yields a zero component rather
    /// than an error (see `compute_material_costs`).
    ///
    /// ## Example
    /// ```rust
    /// use stitchquote_core::money::Money;
    ///
    /// let inc = Money::from_cents(5);
    /// assert_eq!(Money::round_up_to(11.4, inc).cents(), 15);
    /// assert_eq!(Money::round_up_to(15.0, inc).cents(), 15);
    /// assert_eq!(Money::round_up_to(15.2, inc).cents(), 15); // rounds to 15 first
    /// assert_eq!(Money::round_up_to(-3.0, inc).cents(), 0);
    /// ```
    pub fn round_up_to(raw_cents: f64, increment: Money) -> Money {
        if raw_cents <= 0.0 || increment.0 <= 0 {
            return Money::zero();
        }
        let cents = raw_cents.round() as i64;
        let inc = increment.0;
        Money((cents + inc - 1) / inc * inc)
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use stitchquote_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(465); // 4.65 per piece
    /// let lot = unit_price.multiply_quantity(6);
    /// assert_eq!(lot.cents(), 2790); // 27.90 for the minimum batch
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (300 = 3%)
    ///
    /// ## Example
    /// ```rust
    /// use stitchquote_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(10000); // 100.00
    /// let discounted = subtotal.apply_percentage_discount(300); // 3% off
    /// assert_eq!(discounted.cents(), 9700); // 97.00
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // i128 guards against overflow on large lot subtotals
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major_units().abs(),
            self.cents_part()
        )
    }
}

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

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
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
        assert_eq!(money.major_units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(300, 0);
        assert_eq!(money.cents(), 30000);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
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
    fn test_round_up_to_five_cent_grid() {
        let inc = Money::from_cents(5);

        // The backing example from the standard price list:
        // 100 cm² × 0.03 cents/cm² × 3.8 = 11.4 raw cents → 0.15
        assert_eq!(Money::round_up_to(11.4, inc).cents(), 15);

        // Exact multiples stay put
        assert_eq!(Money::round_up_to(15.0, inc).cents(), 15);
        assert_eq!(Money::round_up_to(500.0, inc).cents(), 500);

        // One raw cent above a multiple jumps a full step
        assert_eq!(Money::round_up_to(16.0, inc).cents(), 20);

        // Raw value is rounded to whole cents before the ceil:
        // 15.2 → 15 → 15, but 15.6 → 16 → 20
        assert_eq!(Money::round_up_to(15.2, inc).cents(), 15);
        assert_eq!(Money::round_up_to(15.6, inc).cents(), 20);
    }

    #[test]
    fn test_round_up_to_degenerate_inputs() {
        let inc = Money::from_cents(5);
        assert_eq!(Money::round_up_to(0.0, inc).cents(), 0);
        assert_eq!(Money::round_up_to(-42.0, inc).cents(), 0);
        assert_eq!(Money::round_up_to(10.0, Money::zero()).cents(), 0);
    }

    #[test]
    fn test_round_up_to_alternative_increment() {
        // The 0.10 increment from an earlier price-list revision still works;
        // only the crate constant pins which one is in force.
        let inc = Money::from_cents(10);
        assert_eq!(Money::round_up_to(11.4, inc).cents(), 20);
        assert_eq!(Money::round_up_to(30.0, inc).cents(), 30);
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::from_cents(10000); // 100.00
        let discounted = subtotal.apply_percentage_discount(300); // 3%
        assert_eq!(discounted.cents(), 9700);

        // 0 bps is identity
        assert_eq!(subtotal.apply_percentage_discount(0).cents(), 10000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let lot_total = unit_price.multiply_quantity(6);
        assert_eq!(lot_total.cents(), 1794);
    }
}
