//! Region-Select — interactive region-selection core.
//!
//! The user drags a rectangle over a rendered page; this crate owns the
//! overlay lifecycle, the pointer-driven selection state machine, the
//! logical→physical pixel transformation, and the message protocol to
//! the host controller that does the actual capturing:
//! - Coordinate geometry (geometry/)
//! - Rendering-surface capability (overlay/)
//! - Selection state machine (selection/)
//! - Host message bridge (bridge/)
//!
//! The host wires it up by implementing [`OverlaySurface`] for its
//! rendering environment, forwarding surface input to
//! [`SelectionBridge::handle_input`], and draining the event channel.

pub mod bridge;
pub mod geometry;
pub mod overlay;
pub mod selection;

pub use bridge::{Ack, BridgeError, CancelReason, Command, SelectionBridge, SelectionEvent};
pub use geometry::{to_physical, LogicalPoint, LogicalRect, PhysicalRect};
pub use overlay::{OverlaySurface, SelectionFrame, SurfaceError, Viewport};
pub use selection::{InputEvent, SelectionMachine, TokioSettleTimer, MIN_SELECTION_DIM, SETTLE_DELAY};
