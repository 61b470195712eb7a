//! Rectangle and point types for the two pixel spaces.
//!
//! Logical (CSS) pixels are what pointer events report; physical
//! (device) pixels are what a downstream crop consumes. The two never
//! mix: a `PhysicalRect` is only ever produced by `to_physical`.

use serde::Serialize;

/// A point in the page's logical pixel space, as reported by pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalPoint {
    pub x: f64,
    pub y: f64,
}

impl LogicalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A normalized rectangle in logical pixel space.
///
/// Always satisfies `width >= 0` and `height >= 0` — construct it with
/// [`LogicalRect::from_corners`], which sorts the corners, so a drag in
/// any direction yields a valid rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LogicalRect {
    /// Build the normalized rect spanned by two opposite corners.
    ///
    /// `left`/`top` are the componentwise minimum of the two points, so
    /// dragging up-left of the anchor works the same as down-right.
    pub fn from_corners(a: LogicalPoint, b: LogicalPoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }
}

/// An integer rectangle in device pixel space.
///
/// Fields are `u32` because the capture/crop stage downstream consumes
/// unsigned device-pixel offsets and extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhysicalRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_any_drag_direction() {
        let anchor = LogicalPoint::new(300.0, 250.0);
        let corners = [
            LogicalPoint::new(100.0, 100.0), // up-left of anchor
            LogicalPoint::new(500.0, 100.0), // up-right
            LogicalPoint::new(100.0, 400.0), // down-left
            LogicalPoint::new(500.0, 400.0), // down-right
        ];

        for c in corners {
            let rect = LogicalRect::from_corners(anchor, c);
            assert!(rect.width >= 0.0 && rect.height >= 0.0);
            assert_eq!(rect.left, anchor.x.min(c.x));
            assert_eq!(rect.top, anchor.y.min(c.y));
        }
    }

    #[test]
    fn up_left_drag_yields_top_above_anchor() {
        let anchor = LogicalPoint::new(300.0, 250.0);
        let current = LogicalPoint::new(100.0, 100.0);
        let rect = LogicalRect::from_corners(anchor, current);
        assert_eq!(rect.left, 100.0);
        assert_eq!(rect.top, 100.0);
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 150.0);
        assert!(rect.top < anchor.y);
    }

    #[test]
    fn zero_drag_is_a_zero_rect() {
        let p = LogicalPoint::new(42.5, 17.25);
        let rect = LogicalRect::from_corners(p, p);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }
}
