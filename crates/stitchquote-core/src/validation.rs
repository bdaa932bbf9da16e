//! # Validation Module
//!
//! Input validation for the quotation engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Quoting UI (TypeScript)                                      │
//! │  ├── Basic format checks (empty inputs, NaN)                           │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Dimensions strictly positive and finite                           │
//! │  ├── Color count and quantity at least 1                               │
//! │  └── Sublimation width against the print roll                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine invariants                                            │
//! │  └── No cost component runs on unvalidated input; a failed check       │
//! │      means NO partial CostBreakdown, ever                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is deliberately NOT validated here: price-list rates. A zero or
//! missing rate degrades to a zero cost component; rejecting admin data is
//! the configuration UI's job, and a stale quote is worse for the shop than
//! a visibly-too-cheap one.

use crate::error::ValidationError;
use crate::sublimation::ROLL_WIDTH_CM;
use crate::types::DesignSpecification;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Design Validators
// =============================================================================

/// Validates design dimensions.
///
/// ## Rules
/// - Both width and height strictly positive
/// - Both finite (NaN/∞ from a corrupted payload are rejected the same way)
///
/// ## Example
/// ```rust
/// use stitchquote_core::validation::validate_dimensions;
///
/// assert!(validate_dimensions(10.0, 8.0).is_ok());
/// assert!(validate_dimensions(0.0, 8.0).is_err());
/// assert!(validate_dimensions(10.0, -1.0).is_err());
/// assert!(validate_dimensions(f64::NAN, 8.0).is_err());
/// ```
pub fn validate_dimensions(width_cm: f64, height_cm: f64) -> ValidationResult<()> {
    let positive_finite = |v: f64| v > 0.0 && v.is_finite();

    if !positive_finite(width_cm) || !positive_finite(height_cm) {
        return Err(ValidationError::InvalidDimensions {
            width_cm,
            height_cm,
        });
    }

    Ok(())
}

/// Validates the thread color count.
///
/// ## Rules
/// - At least one color (a design with zero colors cannot be stitched)
pub fn validate_color_count(color_count: u32) -> ValidationResult<()> {
    if color_count == 0 {
        return Err(ValidationError::NoColors);
    }

    Ok(())
}

/// Validates the requested production quantity.
///
/// ## Rules
/// - At least 1 piece. There is no upper bound: the volume-discount
///   schedule is open-ended above 501 units.
///
/// Note the minimum *batch* of 6 is not enforced here: small orders are
/// legal and billed as 6 by the assembler (`apply_minimum_batch_rule`).
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::InvalidQuantity { quantity });
    }

    Ok(())
}

/// Validates that a sublimated design fits the print roll.
///
/// ## Rules
/// - Width at most 100 cm (the roll width). A wider design cannot be laid
///   out at all; this is surfaced as a typed error before any cost runs,
///   never silently clamped.
pub fn validate_sublimation_width(width_cm: f64) -> ValidationResult<()> {
    if width_cm > ROLL_WIDTH_CM {
        return Err(ValidationError::SublimationTooWide {
            width_cm,
            roll_width_cm: ROLL_WIDTH_CM,
        });
    }

    Ok(())
}

/// Validates a whole design specification plus the requested quantity.
///
/// This is the gate `compute_quotation` runs before any component
/// calculator; the checks mirror the per-field validators above.
pub fn validate_design(spec: &DesignSpecification, quantity: u32) -> ValidationResult<()> {
    validate_dimensions(spec.width_cm, spec.height_cm)?;
    validate_color_count(spec.color_count)?;
    validate_quantity(quantity)?;

    if spec.has_sublimation {
        validate_sublimation_width(spec.width_cm)?;
    }

    Ok(())
}

// =============================================================================
// Record Key Validators
// =============================================================================

/// Validates a caller-supplied record key.
///
/// ## Rules
/// - Must be a valid UUID format
/// - 36 characters with hyphens: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
///
/// ## Example
/// ```rust
/// use stitchquote_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FabricType;

    fn spec(width: f64, height: f64, sublimation: bool) -> DesignSpecification {
        DesignSpecification {
            width_cm: width,
            height_cm: height,
            color_count: 2,
            measured_stitch_count: 0,
            has_applique: false,
            fabric_type: FabricType::Normal,
            has_sublimation: sublimation,
        }
    }

    #[test]
    fn test_validate_dimensions() {
        assert!(validate_dimensions(10.0, 8.0).is_ok());
        assert!(validate_dimensions(0.1, 0.1).is_ok());

        assert!(validate_dimensions(0.0, 8.0).is_err());
        assert!(validate_dimensions(10.0, 0.0).is_err());
        assert!(validate_dimensions(-3.0, 8.0).is_err());
        assert!(validate_dimensions(f64::NAN, 8.0).is_err());
        assert!(validate_dimensions(f64::INFINITY, 8.0).is_err());
    }

    #[test]
    fn test_validate_color_count() {
        assert!(validate_color_count(1).is_ok());
        assert!(validate_color_count(12).is_ok());
        assert!(validate_color_count(0).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(5).is_ok()); // below min batch is legal
        assert!(validate_quantity(10_000).is_ok()); // no upper bound
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_validate_sublimation_width() {
        assert!(validate_sublimation_width(100.0).is_ok()); // exactly the roll
        assert!(validate_sublimation_width(99.9).is_ok());
        assert!(validate_sublimation_width(100.1).is_err());
        assert!(validate_sublimation_width(101.0).is_err());
    }

    #[test]
    fn test_validate_design_gates_sublimation_by_flag() {
        // 101 cm wide is fine without sublimation...
        assert!(validate_design(&spec(101.0, 20.0, false), 1).is_ok());
        // ...and rejected with it
        assert!(validate_design(&spec(101.0, 20.0, true), 1).is_err());
    }

    #[test]
    fn test_validate_design_rejects_before_costing() {
        let err = validate_design(&spec(0.0, 8.0, false), 1).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
        assert!(validate_uuid("123").is_err());
    }
}
