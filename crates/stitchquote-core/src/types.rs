//! # Domain Types
//!
//! Core domain types used throughout the quotation engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌─────────────────┐  ┌─────────────────┐    │
//! │  │ DesignSpecification  │  │  CostBreakdown  │  │    Quotation    │    │
//! │  │  ──────────────────  │  │  ─────────────  │  │  ─────────────  │    │
//! │  │  width/height (cm)   │  │  stitching      │  │  quantity       │    │
//! │  │  color_count         │  │  backing        │  │  unit prices    │    │
//! │  │  measured stitches   │  │  fabric/cutting │  │  discount_bps   │    │
//! │  │  appliqué/fabric     │  │  sublimation    │  │  subtotal/total │    │
//! │  │  sublimation         │  │  hoop_name      │  └─────────────────┘    │
//! │  └──────────────────────┘  └─────────────────┘                         │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────────────────────────────┐    │
//! │  │    ImageAnalysis     │  │          QuotationRecord             │    │
//! │  │  (consumed from the  │  │  (produced for persistence/display,  │    │
//! │  │   analysis service)  │  │   flat cents fields)                 │    │
//! │  └──────────────────────┘  └──────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `QuotationRecord` freezes everything the quote was computed from
//! (design parameters, the price-list revision id, every cost component)
//! so the historical view can redisplay or re-assemble it without the
//! active configuration having any say.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Fabric Type
// =============================================================================

/// The base fabric an appliqué patch is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FabricType {
    /// Plain weave, the common case.
    Normal,
    /// Stiffened/structured weave (caps, heavy garments); an order of
    /// magnitude pricier per meter.
    Structured,
}

impl Default for FabricType {
    fn default() -> Self {
        FabricType::Normal
    }
}

// =============================================================================
// Image Analysis (consumed collaborator interface)
// =============================================================================

/// Physical dimensions of a design, in centimeters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Result of the external Image Analysis Service for an uploaded or
/// captured design, scaled to the requested physical width.
///
/// The engine treats these numbers as already validated upstream; it only
/// consumes them to build a [`DesignSpecification`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageAnalysis {
    /// Stitch count estimated from the vectorized image.
    pub estimated_stitches: u32,
    /// Number of dominant thread colors detected.
    pub num_colors: u32,
    /// Physical dimensions at the requested width.
    pub dims: Dimensions,
    /// Base64 preview of the processed image, passed through for display.
    pub processed_image_preview: String,
}

// =============================================================================
// Design Specification
// =============================================================================

/// Everything the engine needs to price one design. Immutable once costed;
/// changing any input means a new specification and a new quotation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DesignSpecification {
    /// Design width in centimeters. Must be strictly positive.
    pub width_cm: f64,

    /// Design height in centimeters. Must be strictly positive.
    pub height_cm: f64,

    /// Number of thread colors (at least 1).
    pub color_count: u32,

    /// Measured stitch count; 0 means "estimate from area and density".
    pub measured_stitch_count: u32,

    /// Whether the design carries an appliqué patch (extra fabric + cutting).
    pub has_applique: bool,

    /// Fabric the appliqué is cut from. Ignored unless `has_applique`.
    pub fabric_type: FabricType,

    /// Whether sublimation printing was requested.
    pub has_sublimation: bool,
}

impl DesignSpecification {
    /// Builds a specification from an Image Analysis Service result.
    ///
    /// This is the adapter the upload/camera quoting surfaces use: those
    /// flows price embroidery only, so appliqué and sublimation are off and
    /// the fabric type is the default.
    ///
    /// ## Example
    /// ```rust
    /// use stitchquote_core::types::{DesignSpecification, Dimensions, ImageAnalysis};
    ///
    /// let analysis = ImageAnalysis {
    ///     estimated_stitches: 5400,
    ///     num_colors: 3,
    ///     dims: Dimensions { width: 10.0, height: 8.0 },
    ///     processed_image_preview: String::new(),
    /// };
    /// let spec = DesignSpecification::from_image_analysis(&analysis);
    /// assert_eq!(spec.measured_stitch_count, 5400);
    /// assert!(!spec.has_applique);
    /// ```
    pub fn from_image_analysis(analysis: &ImageAnalysis) -> Self {
        DesignSpecification {
            width_cm: analysis.dims.width,
            height_cm: analysis.dims.height,
            color_count: analysis.num_colors,
            measured_stitch_count: analysis.estimated_stitches,
            has_applique: false,
            fabric_type: FabricType::default(),
            has_sublimation: false,
        }
    }

    /// Design footprint in cm².
    #[inline]
    pub fn area_cm2(&self) -> f64 {
        self.width_cm * self.height_cm
    }
}

// =============================================================================
// Cost Breakdown
// =============================================================================

/// Itemized per-unit cost components for one design.
///
/// Components that don't apply are zero (`fabric`/`cutting` without
/// appliqué, `sublimation` without sublimation). Every component already
/// carries commercial rounding; their sum IS the real unit price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostBreakdown {
    /// Embroidery stitching, color surcharge folded into the per-1000 rate.
    pub stitching: Money,
    /// Backing ("pellón"), priced on the hoop area, not the design area.
    pub backing: Money,
    /// Appliqué fabric.
    pub fabric: Money,
    /// Appliqué cutting service.
    pub cutting: Money,
    /// Sublimation printing, per piece.
    pub sublimation: Money,
    /// The frame the design was priced in.
    pub hoop_name: String,
}

impl CostBreakdown {
    /// Sum of all cost components: the real per-unit price.
    pub fn unit_price(&self) -> Money {
        self.stitching + self.backing + self.fabric + self.cutting + self.sublimation
    }
}

// =============================================================================
// Quotation
// =============================================================================

/// The final priced quotation for a quantity of one design.
///
/// Created once per costing run and never mutated; if any input changes,
/// a new `Quotation` supersedes this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quotation {
    /// Pieces the customer asked for.
    pub quantity: u32,

    /// Sum of the cost components for one piece.
    pub unit_price_real: Money,

    /// Per-piece price the customer effectively pays. Equals
    /// `unit_price_real` at or above the minimum batch; below it, this is
    /// the billed lot divided by the actual quantity (display only; the
    /// canonical amount is `subtotal`).
    pub unit_price_billed: Money,

    /// Volume discount in basis points (0, 200, 300, 400 or 500).
    pub discount_bps: u32,

    /// Billed lot amount before discount.
    pub subtotal: Money,

    /// Final amount after the volume discount.
    pub total: Money,
}

// =============================================================================
// Quotation Record (produced collaborator interface)
// =============================================================================

/// The flat record handed to the persistence layer and the ticket renderer.
///
/// Combines the design snapshot, the cost breakdown, the quotation figures
/// and caller-supplied metadata. Money travels as raw cents here, the
/// teacher-friendly shape for a database row; use [`QuotationRecord::breakdown`]
/// and [`QuotationRecord::quotation`] to get typed values back.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuotationRecord {
    /// Caller-supplied record key (UUID).
    pub id: String,
    /// Client this quote belongs to.
    pub client_id: String,
    /// Price-list revision the quote was computed against.
    pub pricing_config_id: String,
    /// Human-readable job name ("Polo club logo, left chest").
    pub job_name: String,

    // --- design snapshot ---
    pub width_cm: f64,
    pub height_cm: f64,
    pub color_count: u32,
    /// Billable stitches actually priced (after estimation/floor).
    pub stitch_count: u32,
    pub hoop_name: String,
    pub fabric_type: FabricType,
    pub has_applique: bool,
    pub has_sublimation: bool,

    // --- per-unit cost components, in cents ---
    pub stitching_cents: i64,
    pub backing_cents: i64,
    pub fabric_cents: i64,
    pub cutting_cents: i64,
    pub sublimation_cents: i64,

    // --- quotation figures, in cents ---
    pub quantity: u32,
    pub unit_price_real_cents: i64,
    pub unit_price_billed_cents: i64,
    pub discount_bps: u32,
    pub subtotal_cents: i64,
    pub total_cents: i64,

    /// When the quote was produced (caller-supplied).
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied metadata attached to a produced record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordMeta {
    pub id: String,
    pub client_id: String,
    pub pricing_config_id: String,
    pub job_name: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl QuotationRecord {
    /// Flattens a costing run into a persistable record.
    pub fn from_parts(
        meta: RecordMeta,
        spec: &DesignSpecification,
        stitch_count: u32,
        breakdown: &CostBreakdown,
        quotation: &Quotation,
    ) -> Self {
        QuotationRecord {
            id: meta.id,
            client_id: meta.client_id,
            pricing_config_id: meta.pricing_config_id,
            job_name: meta.job_name,
            width_cm: spec.width_cm,
            height_cm: spec.height_cm,
            color_count: spec.color_count,
            stitch_count,
            hoop_name: breakdown.hoop_name.clone(),
            fabric_type: spec.fabric_type,
            has_applique: spec.has_applique,
            has_sublimation: spec.has_sublimation,
            stitching_cents: breakdown.stitching.cents(),
            backing_cents: breakdown.backing.cents(),
            fabric_cents: breakdown.fabric.cents(),
            cutting_cents: breakdown.cutting.cents(),
            sublimation_cents: breakdown.sublimation.cents(),
            quantity: quotation.quantity,
            unit_price_real_cents: quotation.unit_price_real.cents(),
            unit_price_billed_cents: quotation.unit_price_billed.cents(),
            discount_bps: quotation.discount_bps,
            subtotal_cents: quotation.subtotal.cents(),
            total_cents: quotation.total.cents(),
            created_at: meta.created_at,
        }
    }

    /// Rebuilds the typed cost breakdown from the stored cents fields.
    ///
    /// The historical-recompute view uses this to re-`assemble` a stored
    /// quote without touching the active price list.
    pub fn breakdown(&self) -> CostBreakdown {
        CostBreakdown {
            stitching: Money::from_cents(self.stitching_cents),
            backing: Money::from_cents(self.backing_cents),
            fabric: Money::from_cents(self.fabric_cents),
            cutting: Money::from_cents(self.cutting_cents),
            sublimation: Money::from_cents(self.sublimation_cents),
            hoop_name: self.hoop_name.clone(),
        }
    }

    /// Rebuilds the typed quotation from the stored cents fields.
    pub fn quotation(&self) -> Quotation {
        Quotation {
            quantity: self.quantity,
            unit_price_real: Money::from_cents(self.unit_price_real_cents),
            unit_price_billed: Money::from_cents(self.unit_price_billed_cents),
            discount_bps: self.discount_bps,
            subtotal: Money::from_cents(self.subtotal_cents),
            total: Money::from_cents(self.total_cents),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> DesignSpecification {
        DesignSpecification {
            width_cm: 10.0,
            height_cm: 8.0,
            color_count: 3,
            measured_stitch_count: 0,
            has_applique: true,
            fabric_type: FabricType::Structured,
            has_sublimation: false,
        }
    }

    #[test]
    fn test_fabric_type_default() {
        assert_eq!(FabricType::default(), FabricType::Normal);
    }

    #[test]
    fn test_area() {
        assert!((sample_spec().area_cm2() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_image_analysis_is_embroidery_only() {
        let analysis = ImageAnalysis {
            estimated_stitches: 7200,
            num_colors: 4,
            dims: Dimensions {
                width: 12.0,
                height: 9.5,
            },
            processed_image_preview: "data:image/png;base64,...".to_string(),
        };
        let spec = DesignSpecification::from_image_analysis(&analysis);
        assert_eq!(spec.width_cm, 12.0);
        assert_eq!(spec.height_cm, 9.5);
        assert_eq!(spec.color_count, 4);
        assert_eq!(spec.measured_stitch_count, 7200);
        assert!(!spec.has_applique);
        assert!(!spec.has_sublimation);
        assert_eq!(spec.fabric_type, FabricType::Normal);
    }

    #[test]
    fn test_breakdown_unit_price_sums_components() {
        let breakdown = CostBreakdown {
            stitching: Money::from_cents(330),
            backing: Money::from_cents(15),
            fabric: Money::from_cents(100),
            cutting: Money::from_cents(10),
            sublimation: Money::from_cents(75),
            hoop_name: "10 cm".to_string(),
        };
        assert_eq!(breakdown.unit_price().cents(), 530);
    }

    #[test]
    fn test_inapplicable_components_default_to_zero() {
        let breakdown = CostBreakdown {
            stitching: Money::from_cents(330),
            hoop_name: "10 cm".to_string(),
            ..CostBreakdown::default()
        };
        assert!(breakdown.fabric.is_zero());
        assert!(breakdown.cutting.is_zero());
        assert!(breakdown.sublimation.is_zero());
        assert_eq!(breakdown.unit_price().cents(), 330);
    }

    #[test]
    fn test_record_round_trips_breakdown_and_quotation() {
        let breakdown = CostBreakdown {
            stitching: Money::from_cents(330),
            backing: Money::from_cents(15),
            fabric: Money::from_cents(100),
            cutting: Money::from_cents(10),
            sublimation: Money::zero(),
            hoop_name: "13 cm".to_string(),
        };
        let quotation = Quotation {
            quantity: 12,
            unit_price_real: Money::from_cents(455),
            unit_price_billed: Money::from_cents(455),
            discount_bps: 0,
            subtotal: Money::from_cents(5460),
            total: Money::from_cents(5460),
        };
        let meta = RecordMeta {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            client_id: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            pricing_config_id: "550e8400-e29b-41d4-a716-446655440002".to_string(),
            job_name: "Cap logo".to_string(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        };

        let record = QuotationRecord::from_parts(meta, &sample_spec(), 4840, &breakdown, &quotation);
        assert_eq!(record.breakdown(), breakdown);
        assert_eq!(record.quotation(), quotation);
        assert_eq!(record.stitch_count, 4840);
        assert_eq!(record.hoop_name, "13 cm");
    }

    #[test]
    fn test_record_serde_round_trip() {
        let meta = RecordMeta {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            client_id: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            pricing_config_id: "550e8400-e29b-41d4-a716-446655440002".to_string(),
            job_name: "Sleeve patch".to_string(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        };
        let quotation = Quotation {
            quantity: 6,
            unit_price_real: Money::from_cents(465),
            unit_price_billed: Money::from_cents(465),
            discount_bps: 0,
            subtotal: Money::from_cents(2790),
            total: Money::from_cents(2790),
        };
        let record = QuotationRecord::from_parts(
            meta,
            &sample_spec(),
            2000,
            &CostBreakdown::default(),
            &quotation,
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: QuotationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_cents, 2790);
        assert_eq!(back.fabric_type, FabricType::Structured);
        assert_eq!(back.quotation(), quotation);
    }
}
