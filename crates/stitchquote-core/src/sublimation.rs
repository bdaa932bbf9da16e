//! # Sublimation Planner
//!
//! Prices digital print-then-transfer ("sublimation") jobs via a roll-layout
//! estimate rather than a flat per-area rate.
//!
//! ## Roll Layout
//! ```text
//! ┌───────────────────────── 100 cm roll width ─────────────────────────┐
//! │ [img][img][img][img]                      ◄── images_per_row =      │
//! │ [img][img][img][img]                          floor(100 / width)    │
//! │ [img][img]                                                          │
//! │          ▲                                                          │
//! │          └── rows_needed = ceil(quantity / images_per_row)          │
//! │                                                                     │
//! │  length used = rows × height;  the lot pays its share of the roll   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The estimate is deliberately row-greedy (no rotation, no mixed-row
//! packing): it is a costing heuristic, not a cutting plan.
//!
//! A lot never prices below a quarter of the baseline sheet cost: the
//! commercial floor that keeps a one-off keychain print from quoting at a
//! fraction of a cent.
//!
//! ## Lot vs Per-Unit
//! The planner produces the *lot* cost; [`SublimationPlan`] also reports a
//! per-piece figure (lot / quantity, itself commercially rounded). Callers
//! must pick explicitly; the assembler consumes the per-piece figure, the
//! persistence record keeps the lot.

use crate::config::PricingConfig;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_sublimation_width;
use crate::COMMERCIAL_INCREMENT;

/// Print roll width in centimeters.
pub const ROLL_WIDTH_CM: f64 = 100.0;

/// Print roll length in centimeters (100 m).
pub const ROLL_LENGTH_CM: f64 = 10_000.0;

/// Total printable roll area in cm².
pub const ROLL_AREA_CM2: f64 = ROLL_WIDTH_CM * ROLL_LENGTH_CM;

/// A lot never prices below this fraction of the baseline sheet cost.
pub const BASELINE_FLOOR_FACTOR: f64 = 0.25;

// =============================================================================
// Sublimation Plan
// =============================================================================

/// Result of the roll-layout estimate for one lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SublimationPlan {
    lot_cost: Money,
    quantity: u32,
}

impl SublimationPlan {
    /// Cost of printing the whole lot.
    #[inline]
    pub fn lot_cost(&self) -> Money {
        self.lot_cost
    }

    /// Per-piece share of the lot cost, commercially rounded so it sums
    /// cleanly with the other breakdown components.
    pub fn per_unit_cost(&self) -> Money {
        if self.quantity == 0 {
            return Money::zero();
        }
        Money::round_up_to(
            self.lot_cost.cents() as f64 / self.quantity as f64,
            COMMERCIAL_INCREMENT,
        )
    }
}

// =============================================================================
// Planner
// =============================================================================

/// Estimates the sublimation cost for `quantity` copies of a design.
///
/// Fails with [`ValidationError::SublimationTooWide`] when the design is
/// wider than the roll. Surfaced before any cost is produced, never
/// clamped.
///
/// ## Example
/// ```rust
/// use stitchquote_core::config::PricingConfig;
/// use stitchquote_core::sublimation::plan_sublimation;
///
/// let config = PricingConfig::default();
///
/// // 100 copies of a 10x10 design: 10 per row, 10 rows, 10 m of roll
/// let plan = plan_sublimation(10.0, 10.0, 100, &config).unwrap();
/// assert_eq!(plan.lot_cost().cents(), 300); // 1% of a 300.00 roll
///
/// // Wider than the roll is a hard validation error
/// assert!(plan_sublimation(101.0, 10.0, 1, &config).is_err());
/// ```
pub fn plan_sublimation(
    width_cm: f64,
    height_cm: f64,
    quantity: u32,
    config: &PricingConfig,
) -> Result<SublimationPlan, ValidationError> {
    validate_sublimation_width(width_cm)?;

    let images_per_row = (ROLL_WIDTH_CM / width_cm).floor() as u32;
    if images_per_row == 0 {
        // unreachable given the width check; kept as a guard
        return Ok(SublimationPlan {
            lot_cost: Money::zero(),
            quantity,
        });
    }

    let rows_needed = (quantity + images_per_row - 1) / images_per_row;
    let length_used_cm = rows_needed as f64 * height_cm;
    let area_used_cm2 = length_used_cm * ROLL_WIDTH_CM;

    let raw = area_used_cm2 / ROLL_AREA_CM2 * config.print_roll_cost_cents as f64;
    let floored = raw.max(BASELINE_FLOOR_FACTOR * config.print_baseline_unit_cost_cents as f64);

    Ok(SublimationPlan {
        lot_cost: Money::round_up_to(floored, COMMERCIAL_INCREMENT),
        quantity,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
