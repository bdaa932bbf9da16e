//! # Hoop Selection
//!
//! Maps a design footprint to the smallest suitable embroidery frame
//! ("bastidor") from an ordered catalog.
//!
//! ## Sizing Rule
//! The footprint compared is the design *area* (`width × height`) against
//! the square of the hoop size. Both quoting surfaces of the original shop
//! tool used this rule; the max-single-dimension variant is not supported.
//! One rule, documented here, applied everywhere.
//!
//! ## Oversize Policy
//! A design larger than every frame is capped to the largest frame rather
//! than rejected: the shop splits such jobs manually, and the quote must
//! still come out.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Hoop Profile
// =============================================================================

/// One embroidery frame in the shop's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HoopProfile {
    /// Display name ("13 cm").
    pub name: String,
    /// Frame side length in centimeters (frames are square).
    pub size_cm: u32,
    /// Machine time to cut an appliqué in this frame, in seconds.
    pub cutting_time_seconds: u32,
}

impl HoopProfile {
    /// Stitchable area of this frame in cm².
    #[inline]
    pub fn area_cm2(&self) -> f64 {
        (self.size_cm * self.size_cm) as f64
    }
}

/// The shop's standard frame catalog, ascending by size.
///
/// Cutting times scale with the frame: a larger appliqué is a longer
/// cutting path.
pub fn standard_catalog() -> Vec<HoopProfile> {
    vec![
        HoopProfile {
            name: "10 cm".to_string(),
            size_cm: 10,
            cutting_time_seconds: 10,
        },
        HoopProfile {
            name: "13 cm".to_string(),
            size_cm: 13,
            cutting_time_seconds: 20,
        },
        HoopProfile {
            name: "16 cm".to_string(),
            size_cm: 16,
            cutting_time_seconds: 30,
        },
        HoopProfile {
            name: "20 cm".to_string(),
            size_cm: 20,
            cutting_time_seconds: 40,
        },
        HoopProfile {
            name: "31 cm".to_string(),
            size_cm: 31,
            cutting_time_seconds: 50,
        },
    ]
}

// =============================================================================
// Hoop Selector
// =============================================================================

/// Selects the smallest frame whose area accommodates the design, or the
/// largest frame when none fits.
///
/// The catalog is re-sorted ascending before the scan so callers holding an
/// unordered list still get the smallest fit; tie-break is "first that
/// fits". Returns `None` only for an empty catalog.
///
/// ## Example
/// ```rust
/// use stitchquote_core::hoop::{select_hoop, standard_catalog};
///
/// let catalog = standard_catalog();
///
/// // 10x10 = 100 cm² fits exactly in the 10 cm frame (100 cm²)
/// assert_eq!(select_hoop(10.0, 10.0, &catalog).unwrap().name, "10 cm");
///
/// // 12x11 = 132 cm² needs the 13 cm frame (169 cm²)
/// assert_eq!(select_hoop(12.0, 11.0, &catalog).unwrap().name, "13 cm");
///
/// // An oversized design caps at the largest frame
/// assert_eq!(select_hoop(40.0, 40.0, &catalog).unwrap().name, "31 cm");
/// ```
pub fn select_hoop<'a>(
    width_cm: f64,
    height_cm: f64,
    catalog: &'a [HoopProfile],
) -> Option<&'a HoopProfile> {
    let mut ordered: Vec<&HoopProfile> = catalog.iter().collect();
    ordered.sort_by_key(|hoop| hoop.size_cm);

    let design_area = width_cm * height_cm;
    ordered
        .iter()
        .find(|hoop| design_area <= hoop.area_cm2())
        .copied()
        .or_else(|| ordered.last().copied())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smallest_fit_wins() {
        let catalog = standard_catalog();
        assert_eq!(select_hoop(5.0, 5.0, &catalog).unwrap().name, "10 cm");
        assert_eq!(select_hoop(10.0, 10.0, &catalog).unwrap().name, "10 cm");
        assert_eq!(select_hoop(10.0, 10.1, &catalog).unwrap().name, "13 cm");
        assert_eq!(select_hoop(15.0, 15.0, &catalog).unwrap().name, "16 cm");
        assert_eq!(select_hoop(19.0, 20.0, &catalog).unwrap().name, "20 cm");
        assert_eq!(select_hoop(25.0, 25.0, &catalog).unwrap().name, "31 cm");
    }

    #[test]
    fn test_area_rule_not_max_dimension() {
        let catalog = standard_catalog();
        // 20x4 = 80 cm² fits the 10 cm frame by area even though one side
        // exceeds 10 cm. This pins the sizing rule in force.
        assert_eq!(select_hoop(20.0, 4.0, &catalog).unwrap().name, "10 cm");
    }

    #[test]
    fn test_oversized_caps_to_largest() {
        let catalog = standard_catalog();
        let hoop = select_hoop(100.0, 100.0, &catalog).unwrap();
        assert_eq!(hoop.name, "31 cm");
        assert_eq!(hoop.size_cm, 31);
    }

    #[test]
    fn test_unordered_catalog_is_sorted_before_scan() {
        let mut catalog = standard_catalog();
        catalog.reverse();
        assert_eq!(select_hoop(5.0, 5.0, &catalog).unwrap().name, "10 cm");
    }

    #[test]
    fn test_empty_catalog() {
        assert!(select_hoop(5.0, 5.0, &[]).is_none());
    }

    #[test]
    fn test_monotonic_in_each_dimension() {
        let catalog = standard_catalog();
        let mut last_size = 0;
        for width in 1..40 {
            let size = select_hoop(width as f64, 8.0, &catalog).unwrap().size_cm;
            assert!(size >= last_size, "hoop shrank as width grew");
            last_size = size;
        }
    }
}
