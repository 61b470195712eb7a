//! Coordinate geometry — public API.
//!
//! Pure data types and the logical→physical transformation.
//! Nothing in here touches a rendering surface or the wire.

mod rect;
mod transform;

pub use rect::{LogicalPoint, LogicalRect, PhysicalRect};
pub use transform::to_physical;
