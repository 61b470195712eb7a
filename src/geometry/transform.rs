//! Logical→physical transformation — functional core.
//!
//! This module has zero infrastructure dependencies. A finalized
//! logical rect and a scale factor go in, device pixels come out.

use super::rect::{LogicalRect, PhysicalRect};

/// Transform a normalized logical rect into device pixels.
///
/// Each of left/top/width/height is multiplied by `scale` and rounded
/// *independently* — never derived from rounding a sum — so position
/// and extent cannot compound each other's truncation error. Half-way
/// values round away from zero (`f64::round`), which on this
/// non-negative domain is round-half-up; downstream capture observes
/// single-pixel differences, so the rule must stay fixed.
///
/// Pure and total: `scale > 0` and a normalized `rect` are assumed per
/// the callers' invariants, and negative positions clamp to zero.
pub fn to_physical(rect: &LogicalRect, scale: f64) -> PhysicalRect {
    PhysicalRect {
        x: scale_round(rect.left, scale),
        y: scale_round(rect.top, scale),
        width: scale_round(rect.width, scale),
        height: scale_round(rect.height, scale),
    }
}

fn scale_round(v: f64, scale: f64) -> u32 {
    (v * scale).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LogicalPoint;

    fn rect(left: f64, top: f64, width: f64, height: f64) -> LogicalRect {
        LogicalRect::from_corners(
            LogicalPoint::new(left, top),
            LogicalPoint::new(left + width, top + height),
        )
    }

    #[test]
    fn integer_scale_round_trip() {
        let physical = to_physical(&rect(100.0, 50.0, 200.0, 150.0), 2.0);
        assert_eq!(
            physical,
            PhysicalRect {
                x: 200,
                y: 100,
                width: 400,
                height: 300
            }
        );
    }

    #[test]
    fn fractional_scale_rounds_each_field_independently() {
        // 33 * 1.5 = 49.5 and 17 * 1.5 = 25.5 both sit on the half-way
        // point; round-half-up gives 50 and 26. Rounding (left + width)
        // as a sum would give 64 - 15 = 49 instead.
        let physical = to_physical(&rect(10.0, 10.0, 33.0, 17.0), 1.5);
        assert_eq!(
            physical,
            PhysicalRect {
                x: 15,
                y: 15,
                width: 50,
                height: 26
            }
        );
    }

    #[test]
    fn unit_scale_is_plain_rounding() {
        let physical = to_physical(&rect(0.4, 0.6, 10.2, 9.8), 1.0);
        assert_eq!(
            physical,
            PhysicalRect {
                x: 0,
                y: 1,
                width: 10,
                height: 10
            }
        );
    }

    #[test]
    fn zero_rect_stays_zero() {
        let physical = to_physical(&rect(25.0, 25.0, 0.0, 0.0), 3.0);
        assert_eq!(physical.width, 0);
        assert_eq!(physical.height, 0);
    }
}
