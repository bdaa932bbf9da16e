//! # Quotation Assembly
//!
//! The single engine behind every quoting surface of the application.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DesignSpecification + PricingConfig snapshot + quantity                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  validate_design ──(typed error)──► caller re-prompts                  │
//! │        │                                                                │
//! │        ├──► select_hoop ─────┐                                          │
//! │        └──► estimate_stitches┤   (independent)                          │
//! │                              ▼                                          │
//! │            compute_material_costs                                       │
//! │            plan_sublimation (only if requested)                         │
//! │                              │                                          │
//! │                              ▼                                          │
//! │            assemble: min-batch rule → volume discount → Quotation      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The live quote, the manual wizard, the historical recompute view and the
//! shareable ticket all build a [`DesignSpecification`] and call in here;
//! none of them carries pricing arithmetic of its own.
//!
//! ## Minimum Batch
//! Production below 6 pieces is billed as 6: financially, not physically.
//! The customer may order 1; the lot price is 6 × unit. This is business
//! policy, kept in one named function ([`apply_minimum_batch_rule`]) so it
//! can change without touching any cost calculator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::PricingConfig;
use crate::error::{CoreError, CoreResult};
use crate::hoop::{select_hoop, HoopProfile};
use crate::materials::compute_material_costs;
use crate::money::Money;
use crate::stitch::estimate_stitches;
use crate::sublimation::plan_sublimation;
use crate::types::{CostBreakdown, DesignSpecification, Quotation};
use crate::validation::validate_design;
use crate::{MIN_BATCH_QUANTITY, MIN_BILLABLE_STITCHES};

// =============================================================================
// Engine Options
// =============================================================================

/// Per-call policy knobs.
///
/// The defaults reproduce the behavior of every current quoting surface;
/// the options exist so a policy change is a parameter, not a code edit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EngineOptions {
    /// Minimum billable stitch count, applied after measurement/estimation.
    /// `None` disables the floor.
    pub stitch_floor: Option<u32>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            stitch_floor: Some(MIN_BILLABLE_STITCHES),
        }
    }
}

// =============================================================================
// Quote Outcome
// =============================================================================

/// Everything one costing run produces: the itemized breakdown, the final
/// quotation, and the stitch count actually billed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteOutcome {
    /// Billable stitches (after estimation and floor).
    pub stitch_count: u32,
    /// Itemized per-unit costs.
    pub breakdown: CostBreakdown,
    /// Final priced quotation.
    pub quotation: Quotation,
}

// =============================================================================
// Policy Steps
// =============================================================================

/// The minimum-batch billing rule: orders below [`MIN_BATCH_QUANTITY`]
/// pieces are billed as a full minimum batch.
///
/// Returns the unit count to bill, never the count to produce.
#[inline]
pub fn apply_minimum_batch_rule(quantity: u32) -> u32 {
    quantity.max(MIN_BATCH_QUANTITY)
}

/// The volume-discount schedule, a pure step function of the *requested*
/// quantity.
///
/// | quantity  | discount |
/// |-----------|----------|
/// | < 51      | 0%       |
/// | 51–100    | 2%       |
/// | 101–200   | 3%       |
/// | 201–500   | 4%       |
/// | ≥ 501     | 5%       |
#[inline]
pub fn volume_discount_bps(quantity: u32) -> u32 {
    if quantity >= 501 {
        500
    } else if quantity >= 201 {
        400
    } else if quantity >= 101 {
        300
    } else if quantity >= 51 {
        200
    } else {
        0
    }
}

// =============================================================================
// Quotation Assembler
// =============================================================================

/// Folds an itemized breakdown into the final [`Quotation`].
///
/// Deterministic and idempotent: re-assembling the same breakdown for the
/// same quantity reproduces the same quotation, which is how the
/// historical view re-derives totals from a stored record.
///
/// Expects `quantity >= 1` (see `validate_quantity`); the sub-minimum
/// display division guards against zero anyway.
pub fn assemble(breakdown: &CostBreakdown, quantity: u32) -> Quotation {
    let unit_price_real = breakdown.unit_price();

    let billed_units = apply_minimum_batch_rule(quantity);
    let subtotal = unit_price_real.multiply_quantity(billed_units as i64);

    let discount_bps = volume_discount_bps(quantity);
    let total = subtotal.apply_percentage_discount(discount_bps);

    // At or above the minimum batch the billed unit price IS the real one.
    // Below it, the canonical amount is the lot subtotal; the per-piece
    // figure shown to the customer is the lot spread over actual pieces.
    let unit_price_billed = if quantity >= MIN_BATCH_QUANTITY {
        unit_price_real
    } else {
        Money::from_cents(subtotal.cents() / quantity.max(1) as i64)
    };

    Quotation {
        quantity,
        unit_price_real,
        unit_price_billed,
        discount_bps,
        subtotal,
        total,
    }
}

// =============================================================================
// Engine Entry Point
// =============================================================================

/// Prices one design with default policy (stitch floor applied).
///
/// ## Example
/// ```rust
/// use stitchquote_core::config::PricingConfig;
/// use stitchquote_core::hoop::standard_catalog;
/// use stitchquote_core::quote::compute_quotation;
/// use stitchquote_core::types::{DesignSpecification, FabricType};
///
/// let spec = DesignSpecification {
///     width_cm: 10.0,
///     height_cm: 10.0,
///     color_count: 3,
///     measured_stitch_count: 0,
///     has_applique: false,
///     fabric_type: FabricType::Normal,
///     has_sublimation: false,
/// };
/// let outcome = compute_quotation(
///     &spec,
///     &PricingConfig::default(),
///     1,
///     &standard_catalog(),
/// )
/// .unwrap();
///
/// // A single piece still bills as the 6-piece minimum batch
/// assert_eq!(
///     outcome.quotation.subtotal.cents(),
///     outcome.quotation.unit_price_real.cents() * 6
/// );
/// ```
pub fn compute_quotation(
    spec: &DesignSpecification,
    config: &PricingConfig,
    quantity: u32,
    catalog: &[HoopProfile],
) -> CoreResult<QuoteOutcome> {
    compute_quotation_with(spec, config, quantity, catalog, &EngineOptions::default())
}

/// Prices one design with explicit policy options.
///
/// Validation runs first; on failure no cost component is computed and no
/// partial breakdown escapes. The whole computation reads exactly one
/// config snapshot, so concurrent quotes need no coordination.
pub fn compute_quotation_with(
    spec: &DesignSpecification,
    config: &PricingConfig,
    quantity: u32,
    catalog: &[HoopProfile],
    options: &EngineOptions,
) -> CoreResult<QuoteOutcome> {
    validate_design(spec, quantity)?;

    let hoop = select_hoop(spec.width_cm, spec.height_cm, catalog)
        .ok_or(CoreError::EmptyHoopCatalog)?;

    let stitch_count = estimate_stitches(
        spec.measured_stitch_count,
        spec.width_cm,
        spec.height_cm,
        config.default_stitch_density_per_cm2,
        options.stitch_floor,
    );

    let mut breakdown = compute_material_costs(spec, hoop, stitch_count, config);

    if spec.has_sublimation {
        let plan = plan_sublimation(spec.width_cm, spec.height_cm, quantity, config)?;
        breakdown.sublimation = plan.per_unit_cost();
    }

    let quotation = assemble(&breakdown, quantity);

    Ok(QuoteOutcome {
        stitch_count,
        breakdown,
        quotation,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
