//! # Material Cost Calculator
//!
//! Computes the stitching, backing ("pellón"), appliqué-fabric and cutting
//! components of a quote from the price list, the selected hoop and the
//! billable stitch count.
//!
//! ## Cost Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stitches ───► stitching  = stitches/1000 × (rate + color surcharge)   │
//! │                                                                         │
//! │  hoop area ──► backing    = hoop_area × roll_factor × size tier        │
//! │                                                                         │
//! │  design area ► fabric     = area × per-cm² rate × size tier  (appliqué)│
//! │                                                                         │
//! │  hoop time ──► cutting    = seconds × rate/60                (appliqué)│
//! │                                                                         │
//! │  each component commercially rounded BEFORE the sum                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Backing is priced on the *hoop* area, not the design area: the whole
//! frame is backed regardless of how much of it the design covers.
//!
//! These are total functions. A zero or negative rate in the price list
//! produces a zero (or degenerate) component, not an error; rate sanity is
//! the configuration UI's contract, and the engine must still quote.

use crate::config::PricingConfig;
use crate::hoop::HoopProfile;
use crate::money::Money;
use crate::types::{CostBreakdown, DesignSpecification, FabricType};
use crate::COMMERCIAL_INCREMENT;

/// One backing roll covers a 100 m × 100 cm roll: 1 000 000 cm².
const BACKING_ROLL_AREA_CM2: f64 = 1_000_000.0;

/// A fabric meter is a 100 cm cut of 150 cm wide cloth: 15 000 cm².
const FABRIC_METER_AREA_CM2: f64 = 15_000.0;

// =============================================================================
// Size Tiers
// =============================================================================

/// Waste multiplier for material priced through a hoop of the given area.
///
/// Five tiers, one per standard frame, decreasing as the frame grows:
/// mounting a small frame wastes proportionally more backing and fabric
/// around the stitchable window.
///
/// | hoop area (cm²) | frame  | multiplier |
/// |-----------------|--------|------------|
/// | ≤ 100           | 10 cm  | 3.8        |
/// | ≤ 169           | 13 cm  | 3.2        |
/// | ≤ 256           | 16 cm  | 2.5        |
/// | ≤ 400           | 20 cm  | 2.0        |
/// | larger          | 31 cm+ | 1.5        |
pub fn size_tier_multiplier(hoop_area_cm2: f64) -> f64 {
    if hoop_area_cm2 <= 100.0 {
        3.8
    } else if hoop_area_cm2 <= 169.0 {
        3.2
    } else if hoop_area_cm2 <= 256.0 {
        2.5
    } else if hoop_area_cm2 <= 400.0 {
        2.0
    } else {
        1.5
    }
}

// =============================================================================
// Component Calculators
// =============================================================================

/// Embroidery stitching cost.
///
/// The per-1000 rate is the base stitch price plus the color-change
/// surcharge for every color beyond the first; a single-color design pays
/// the base rate alone.
pub fn stitching_cost(stitches: u32, color_count: u32, config: &PricingConfig) -> Money {
    let mut rate_per_1000 = config.stitch_price_per_1000_cents;
    if color_count > 1 {
        rate_per_1000 += config.color_change_factor_cents * (color_count as i64 - 1);
    }

    let raw = stitches as f64 / 1000.0 * rate_per_1000 as f64;
    Money::round_up_to(raw, COMMERCIAL_INCREMENT)
}

/// Backing ("pellón") cost for the selected hoop.
pub fn backing_cost(hoop: &HoopProfile, config: &PricingConfig) -> Money {
    let area = hoop.area_cm2();
    let factor = config.backing_base_cost_per_roll_cents as f64 / BACKING_ROLL_AREA_CM2;
    let raw = area * factor * size_tier_multiplier(area);
    Money::round_up_to(raw, COMMERCIAL_INCREMENT)
}

/// Appliqué fabric cost for the design area.
pub fn fabric_cost(
    design_area_cm2: f64,
    fabric_type: FabricType,
    hoop: &HoopProfile,
    config: &PricingConfig,
) -> Money {
    let per_meter = match fabric_type {
        FabricType::Normal => config.fabric_cost_normal_per_meter_cents,
        FabricType::Structured => config.fabric_cost_structured_per_meter_cents,
    };
    let per_cm2 = per_meter as f64 / FABRIC_METER_AREA_CM2;
    let raw = design_area_cm2 * per_cm2 * size_tier_multiplier(hoop.area_cm2());
    Money::round_up_to(raw, COMMERCIAL_INCREMENT)
}

/// Appliqué cutting cost for the selected hoop.
pub fn cutting_cost(hoop: &HoopProfile, config: &PricingConfig) -> Money {
    let raw = hoop.cutting_time_seconds as f64 * config.cutting_cost_per_60s_cents as f64 / 60.0;
    Money::round_up_to(raw, COMMERCIAL_INCREMENT)
}

// =============================================================================
// Material Cost Calculator
// =============================================================================

/// Computes the material components of a breakdown: stitching, backing and
/// (when the design carries an appliqué) fabric and cutting.
///
/// Sublimation is left at zero; the planner fills it in separately when
/// requested. Inputs are assumed validated (see `validate_design`).
pub fn compute_material_costs(
    spec: &DesignSpecification,
    hoop: &HoopProfile,
    stitches: u32,
    config: &PricingConfig,
) -> CostBreakdown {
    let mut breakdown = CostBreakdown {
        stitching: stitching_cost(stitches, spec.color_count, config),
        backing: backing_cost(hoop, config),
        hoop_name: hoop.name.clone(),
        ..CostBreakdown::default()
    };

    if spec.has_applique {
        breakdown.fabric = fabric_cost(spec.area_cm2(), spec.fabric_type, hoop, config);
        breakdown.cutting = cutting_cost(hoop, config);
    }

    breakdown
}

// =============================================================================
// Unit Tests
// =============================================================================
