//! # Pricing Configuration
//!
//! The versioned, admin-editable price list every costing call reads from.
//!
//! ## Snapshot Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Price-List Lifecycle                               │
//! │                                                                         │
//! │  Admin edits rates ──► publish() appends a NEW immutable row           │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  PriceHistory [v1, v2, v3*]   (* = active, always the newest row)      │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  Every costing call receives ONE snapshot (&PricingConfig) and uses    │
//! │  it for the whole computation. Nothing in the engine reads a global.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Old rows are never mutated; historical quotations reference the row they
//! were priced against (`pricing_config_id` on the record), so a saved quote
//! can be recomputed years later against the rates then in force.
//!
//! Storage of the history is the persistence layer's job; this module only
//! models the append-only invariant as a pure value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Pricing Config
// =============================================================================

/// One immutable row of the price list.
///
/// All rates are integer cents. Accessors return [`Money`] so calculation
/// code never touches raw cent fields.
///
/// A zero rate is *not* rejected here: validation of admin input is the
/// configuration UI's responsibility, and the engine degrades to a zero cost
/// component rather than failing a quote (see `compute_material_costs`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingConfig {
    /// Unique identifier of this price-list revision.
    pub id: String,

    /// Price per 1000 stitches, in cents.
    pub stitch_price_per_1000_cents: i64,

    /// Surcharge folded into the per-1000 rate for each color beyond the
    /// first, in cents.
    pub color_change_factor_cents: i64,

    /// Cost of one backing ("pellón") roll, in cents. A roll covers
    /// 1 000 000 cm², which drives the per-cm² backing factor.
    pub backing_base_cost_per_roll_cents: i64,

    /// Appliqué fabric, normal weave, cents per running meter.
    pub fabric_cost_normal_per_meter_cents: i64,

    /// Appliqué fabric, structured weave, cents per running meter.
    pub fabric_cost_structured_per_meter_cents: i64,

    /// Cost of one full sublimation print roll, in cents.
    pub print_roll_cost_cents: i64,

    /// Reference cost of one standard printed sheet, in cents. The
    /// sublimation planner floors tiny lots at a quarter of this.
    pub print_baseline_unit_cost_cents: i64,

    /// Appliqué cutting service rate, cents per 60 seconds of machine time.
    pub cutting_cost_per_60s_cents: i64,

    /// Fallback stitch density (stitches per cm²) when a design has no
    /// measured stitch count.
    pub default_stitch_density_per_cm2: f64,

    /// When this revision was published.
    #[ts(as = "String")]
    pub modified_at: DateTime<Utc>,
}

impl PricingConfig {
    /// Price per 1000 stitches.
    #[inline]
    pub fn stitch_price_per_1000(&self) -> Money {
        Money::from_cents(self.stitch_price_per_1000_cents)
    }

    /// Per-color surcharge on the per-1000 rate.
    #[inline]
    pub fn color_change_factor(&self) -> Money {
        Money::from_cents(self.color_change_factor_cents)
    }

    /// Cost of one backing roll.
    #[inline]
    pub fn backing_base_cost_per_roll(&self) -> Money {
        Money::from_cents(self.backing_base_cost_per_roll_cents)
    }

    /// Fabric rate per meter, normal weave.
    #[inline]
    pub fn fabric_cost_normal_per_meter(&self) -> Money {
        Money::from_cents(self.fabric_cost_normal_per_meter_cents)
    }

    /// Fabric rate per meter, structured weave.
    #[inline]
    pub fn fabric_cost_structured_per_meter(&self) -> Money {
        Money::from_cents(self.fabric_cost_structured_per_meter_cents)
    }

    /// Cost of one full print roll.
    #[inline]
    pub fn print_roll_cost(&self) -> Money {
        Money::from_cents(self.print_roll_cost_cents)
    }

    /// Reference cost of one standard printed sheet.
    #[inline]
    pub fn print_baseline_unit_cost(&self) -> Money {
        Money::from_cents(self.print_baseline_unit_cost_cents)
    }

    /// Cutting rate per 60 seconds.
    #[inline]
    pub fn cutting_cost_per_60s(&self) -> Money {
        Money::from_cents(self.cutting_cost_per_60s_cents)
    }
}

impl Default for PricingConfig {
    /// The shop's standard rates, used for development and as seed data.
    ///
    /// ## Default Values
    /// - Stitches: 1.50 per thousand, +1.00 per extra color
    /// - Backing: 300.00 per roll
    /// - Fabric: 18.00 (normal) / 180.00 (structured) per meter
    /// - Print: 300.00 per roll, 3.00 baseline sheet
    /// - Cutting: 0.60 per minute
    /// - Density fallback: 55 stitches/cm²
    fn default() -> Self {
        PricingConfig {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            stitch_price_per_1000_cents: 150,
            color_change_factor_cents: 100,
            backing_base_cost_per_roll_cents: 30_000,
            fabric_cost_normal_per_meter_cents: 1_800,
            fabric_cost_structured_per_meter_cents: 18_000,
            print_roll_cost_cents: 30_000,
            print_baseline_unit_cost_cents: 300,
            cutting_cost_per_60s_cents: 60,
            default_stitch_density_per_cm2: 55.0,
            modified_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

// =============================================================================
// Price History
// =============================================================================

/// Append-only history of price-list revisions.
///
/// Invariant: exactly one revision is active at a time, always the newest.
/// `publish` never mutates an existing row; an edit is a new row. This is
/// the pure-value model of the configuration subsystem's
/// deactivate-then-insert behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceHistory {
    revisions: Vec<PricingConfig>,
}

impl PriceHistory {
    /// Creates a history seeded with one initial revision.
    pub fn new(initial: PricingConfig) -> Self {
        PriceHistory {
            revisions: vec![initial],
        }
    }

    /// The active (newest) revision, if any revision has been published.
    #[inline]
    pub fn active(&self) -> Option<&PricingConfig> {
        self.revisions.last()
    }

    /// Appends a new revision and makes it active.
    ///
    /// The previous active row stays in the history untouched so records
    /// priced against it keep resolving.
    pub fn publish(&mut self, revision: PricingConfig) -> &PricingConfig {
        self.revisions.push(revision);
        // just pushed, cannot be empty
        self.revisions.last().unwrap()
    }

    /// All revisions, oldest first.
    #[inline]
    pub fn revisions(&self) -> &[PricingConfig] {
        &self.revisions
    }

    /// Looks up a revision by id, for recomputing a historical quotation.
    pub fn revision(&self, id: &str) -> Option<&PricingConfig> {
        self.revisions.iter().find(|r| r.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn revision(id: &str, stitch_cents: i64) -> PricingConfig {
        PricingConfig {
            id: id.to_string(),
            stitch_price_per_1000_cents: stitch_cents,
            ..PricingConfig::default()
        }
    }

    #[test]
    fn test_money_accessors() {
        let config = PricingConfig::default();
        assert_eq!(config.stitch_price_per_1000().cents(), 150);
        assert_eq!(config.color_change_factor().cents(), 100);
        assert_eq!(config.backing_base_cost_per_roll().cents(), 30_000);
        assert_eq!(config.cutting_cost_per_60s().cents(), 60);
    }

    #[test]
    fn test_publish_appends_and_activates() {
        let mut history = PriceHistory::new(revision("v1", 150));
        assert_eq!(history.active().unwrap().id, "v1");

        history.publish(revision("v2", 175));
        assert_eq!(history.active().unwrap().id, "v2");
        assert_eq!(history.revisions().len(), 2);

        // The superseded row is still there, unchanged
        assert_eq!(history.revision("v1").unwrap().stitch_price_per_1000_cents, 150);
    }

    #[test]
    fn test_exactly_one_active_revision() {
        let mut history = PriceHistory::default();
        assert!(history.active().is_none());

        history.publish(revision("v1", 150));
        history.publish(revision("v2", 160));
        history.publish(revision("v3", 170));

        // Active is always the single newest row
        assert_eq!(history.active().unwrap().id, "v3");
        assert_eq!(
            history
                .revisions()
                .iter()
                .filter(|r| r.id == history.active().unwrap().id)
                .count(),
            1
        );
    }

    #[test]
    fn test_revision_lookup_for_recompute() {
        let mut history = PriceHistory::new(revision("v1", 150));
        history.publish(revision("v2", 300));

        // A record saved against v1 recomputes with v1 rates, not active ones
        let old = history.revision("v1").unwrap();
        assert_eq!(old.stitch_price_per_1000().cents(), 150);
        assert!(history.revision("v9").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = PricingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PricingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stitch_price_per_1000_cents, config.stitch_price_per_1000_cents);
        assert_eq!(back.default_stitch_density_per_cm2, 55.0);
    }
}
