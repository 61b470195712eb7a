//! Overlay presentation — the rendering-surface capability.
//!
//! The selection machine never touches a concrete rendering API. It
//! drives whatever the host environment provides (a DOM overlay, a
//! native window, a test fake) through [`OverlaySurface`], and computes
//! readout placement itself so surfaces stay dumb renderers.

mod layout;

pub use layout::readout_anchor;

use crate::geometry::{LogicalPoint, LogicalRect};

/// Size of the visible viewport, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Everything a surface needs to draw one update of the selection:
/// the frame rectangle, where to anchor the dimension readout, and the
/// readout's text.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionFrame {
    pub rect: LogicalRect,
    pub readout_at: LogicalPoint,
    pub readout_text: String,
}

/// The rendering surface the selection machine draws on.
///
/// Implementations own the visual aids of a session — dimming backdrop,
/// selection frame, dimension readout, instruction banner — and their
/// input listeners.
pub trait OverlaySurface {
    /// Attach all visual aids in one call.
    ///
    /// Must be idempotent: leftovers from a prior session are removed
    /// first, so exactly one instance of each aid exists afterwards.
    fn mount(&mut self) -> Result<(), SurfaceError>;

    /// Reposition the selection frame and dimension readout.
    ///
    /// Pure repositioning — `frame.rect` is already normalized and is
    /// not validated here.
    fn update_frame(&mut self, frame: &SelectionFrame);

    /// Remove every visual aid and the listeners attached to them.
    ///
    /// Safe to call when nothing is mounted; that is a no-op, not an
    /// error.
    fn unmount(&mut self);

    /// Current viewport size, used for readout placement.
    fn viewport(&self) -> Viewport;

    /// The display's device pixel ratio.
    ///
    /// Sampled once per session; a bogus reading (zero, negative,
    /// non-finite) falls back to 1.0 in the machine.
    fn scale_factor(&self) -> f64;
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("rendering surface unavailable: {0}")]
    Unavailable(String),
}
