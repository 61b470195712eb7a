//! Viewport-aware placement of the dimension readout.
//!
//! The readout sits to the right of the selection and above its top
//! edge; near the viewport edges it flips to the left / below so it
//! never leaves the visible area.

use crate::geometry::{LogicalPoint, LogicalRect};
use crate::overlay::Viewport;

/// Gap between the selection's right edge and the readout.
const GAP_RIGHT: f64 = 10.0;
/// Vertical offset that places the readout above the selection's top edge.
const LIFT_ABOVE: f64 = 25.0;
/// Horizontal room the readout needs; less than this to the right edge
/// and it flips to the left of the selection.
const CLEARANCE_RIGHT: f64 = 100.0;
/// Readout width assumed when flipping to the left.
const READOUT_WIDTH: f64 = 80.0;
/// Vertical room the readout needs above the selection; less than this
/// to the top edge and it flips below.
const CLEARANCE_TOP: f64 = 30.0;
/// Gap between the selection's bottom edge and a flipped-below readout.
const GAP_BELOW: f64 = 10.0;

/// Compute where the dimension readout is anchored for `rect`.
pub fn readout_anchor(rect: &LogicalRect, viewport: Viewport) -> LogicalPoint {
    let right = rect.left + rect.width;

    let x = if right + CLEARANCE_RIGHT > viewport.width {
        rect.left - READOUT_WIDTH
    } else {
        right + GAP_RIGHT
    };

    let y = if rect.top < CLEARANCE_TOP {
        rect.top + rect.height + GAP_BELOW
    } else {
        rect.top - LIFT_ABOVE
    };

    LogicalPoint::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LogicalPoint;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    fn rect(left: f64, top: f64, width: f64, height: f64) -> LogicalRect {
        LogicalRect::from_corners(
            LogicalPoint::new(left, top),
            LogicalPoint::new(left + width, top + height),
        )
    }

    #[test]
    fn default_placement_is_right_of_and_above_the_selection() {
        let anchor = readout_anchor(&rect(100.0, 100.0, 200.0, 150.0), VIEWPORT);
        assert_eq!(anchor, LogicalPoint::new(310.0, 75.0));
    }

    #[test]
    fn flips_left_when_selection_reaches_the_right_edge() {
        let anchor = readout_anchor(&rect(1000.0, 100.0, 200.0, 150.0), VIEWPORT);
        assert_eq!(anchor.x, 1000.0 - 80.0);
    }

    #[test]
    fn flips_below_when_selection_touches_the_top_edge() {
        let anchor = readout_anchor(&rect(100.0, 5.0, 200.0, 150.0), VIEWPORT);
        assert_eq!(anchor.y, 5.0 + 150.0 + 10.0);
    }

    #[test]
    fn corner_selection_flips_on_both_axes() {
        let anchor = readout_anchor(&rect(1100.0, 0.0, 150.0, 80.0), VIEWPORT);
        assert_eq!(anchor, LogicalPoint::new(1020.0, 90.0));
    }
}
