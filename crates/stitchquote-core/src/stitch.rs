//! # Stitch Estimation
//!
//! Derives the billable stitch count for a design.
//!
//! A digitized design comes with a measured count from the analysis
//! service; a manual estimate has none and falls back to an area heuristic:
//!
//! ```text
//! stitches = round(width × height × density × 1.1)
//! ```
//!
//! The 1.1 is a fixed slack factor for thread coverage overhead (underlay,
//! pull compensation). Density comes from the price list
//! (`default_stitch_density_per_cm2`, 55/cm² by default).
//!
//! A hard floor of [`MIN_BILLABLE_STITCHES`](crate::MIN_BILLABLE_STITCHES)
//! stitches covers machine setup on tiny designs. Whether the floor applies
//! is caller-configurable ([`EngineOptions`](crate::quote::EngineOptions));
//! every current quoting surface applies it.

use crate::{MIN_BILLABLE_STITCHES, STITCH_SLACK_FACTOR};

/// Returns the billable stitch count for a design.
///
/// A measured count > 0 is used as-is (before the floor); otherwise the
/// count is estimated from the design area and fallback density. Passing
/// `floor: None` disables the minimum.
///
/// Always returns a positive count for positive dimensions; there are no
/// failure modes.
///
/// ## Example
/// ```rust
/// use stitchquote_core::stitch::estimate_stitches;
/// use stitchquote_core::MIN_BILLABLE_STITCHES;
///
/// // Measured count wins
/// assert_eq!(
///     estimate_stitches(7200, 10.0, 10.0, 55.0, Some(MIN_BILLABLE_STITCHES)),
///     7200
/// );
///
/// // No measurement: 10x10 cm at 55/cm² with 10% slack
/// assert_eq!(
///     estimate_stitches(0, 10.0, 10.0, 55.0, Some(MIN_BILLABLE_STITCHES)),
///     6050
/// );
///
/// // Tiny designs are floored
/// assert_eq!(
///     estimate_stitches(0, 2.0, 2.0, 55.0, Some(MIN_BILLABLE_STITCHES)),
///     MIN_BILLABLE_STITCHES
/// );
/// ```
pub fn estimate_stitches(
    measured: u32,
    width_cm: f64,
    height_cm: f64,
    density_per_cm2: f64,
    floor: Option<u32>,
) -> u32 {
    let stitches = if measured > 0 {
        measured
    } else {
        (width_cm * height_cm * density_per_cm2 * STITCH_SLACK_FACTOR).round() as u32
    };

    match floor {
        Some(min) => stitches.max(min),
        None => stitches,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_count_used_as_is() {
        assert_eq!(estimate_stitches(8000, 5.0, 5.0, 55.0, Some(2000)), 8000);
    }

    #[test]
    fn test_area_estimate_with_slack() {
        // 10x10 cm × 55/cm² × 1.1 = 6050
        assert_eq!(estimate_stitches(0, 10.0, 10.0, 55.0, Some(2000)), 6050);
        // 8x6 cm × 55/cm² × 1.1 = 2904
        assert_eq!(estimate_stitches(0, 8.0, 6.0, 55.0, Some(2000)), 2904);
    }

    #[test]
    fn test_floor_applies_to_small_estimates() {
        // 2x2 cm × 55 × 1.1 = 242 → floored
        assert_eq!(estimate_stitches(0, 2.0, 2.0, 55.0, Some(2000)), 2000);
        // ...and to small measured counts
        assert_eq!(estimate_stitches(500, 2.0, 2.0, 55.0, Some(2000)), 2000);
    }

    #[test]
    fn test_floor_disabled() {
        assert_eq!(estimate_stitches(0, 2.0, 2.0, 55.0, None), 242);
        assert_eq!(estimate_stitches(500, 2.0, 2.0, 55.0, None), 500);
    }

    #[test]
    fn test_default_floor_constant() {
        assert_eq!(MIN_BILLABLE_STITCHES, 2000);
    }

    #[test]
    fn test_monotonic_in_area() {
        let mut last = 0;
        for step in 1..50 {
            let side = step as f64;
            let estimate = estimate_stitches(0, side, side, 55.0, None);
            assert!(estimate >= last, "estimate shrank as area grew");
            last = estimate;
        }
    }
}
