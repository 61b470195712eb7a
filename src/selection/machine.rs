//! The pointer-driven selection state machine.
//!
//! Phases: Idle → Selecting → Idle. Completion and cancellation are
//! transient — they run back to Idle within a single event handler, so
//! the only persistent state is the session slot held while Selecting.
//! Exactly one session exists at a time; a reentrant start tears the
//! old one down silently before mounting fresh.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::bridge::{CancelReason, SelectionEvent};
use crate::geometry::{to_physical, LogicalPoint, LogicalRect};
use crate::overlay::{readout_anchor, OverlaySurface, SelectionFrame, SurfaceError};
use crate::selection::timer::SettleTimer;

/// Minimum selectable extent per axis, in logical pixels. Anything
/// smaller is treated as an accidental drag and silently discarded.
pub const MIN_SELECTION_DIM: f64 = 10.0;

/// Pause between overlay teardown and the completion event, giving the
/// rendering surface time to settle before downstream capture runs.
pub const SETTLE_DELAY: Duration = Duration::from_millis(30);

/// Pointer and keyboard input forwarded from the rendering surface.
///
/// Surfaces register listeners on mount and unregister them on unmount;
/// while mounted they forward input here as explicit events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(LogicalPoint),
    PointerMove(LogicalPoint),
    PointerUp,
    Escape,
}

/// One selection interaction, from start command to completion or
/// cancellation. `drag` stays `None` until the first pointer-down.
struct SelectionSession {
    scale: f64,
    drag: Option<Drag>,
}

struct Drag {
    anchor: LogicalPoint,
    current: LogicalPoint,
}

impl Drag {
    fn rect(&self) -> LogicalRect {
        LogicalRect::from_corners(self.anchor, self.current)
    }
}

/// Owns the overlay surface and the single session slot.
pub struct SelectionMachine<S: OverlaySurface> {
    surface: S,
    timer: Box<dyn SettleTimer>,
    events: UnboundedSender<SelectionEvent>,
    session: Option<SelectionSession>,
}

impl<S: OverlaySurface> SelectionMachine<S> {
    pub fn new(
        surface: S,
        timer: Box<dyn SettleTimer>,
        events: UnboundedSender<SelectionEvent>,
    ) -> Self {
        Self {
            surface,
            timer,
            events,
            session: None,
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a session: mount the overlay and arm the input handlers.
    ///
    /// If a session is already live it is torn down first without
    /// emitting anything — sessions never overlap.
    pub fn start(&mut self) -> Result<(), SurfaceError> {
        if self.session.take().is_some() {
            log::debug!("restart while selecting — tearing down prior session");
            self.surface.unmount();
        }

        self.surface.mount()?;
        let scale = sanitize_scale(self.surface.scale_factor());
        self.session = Some(SelectionSession { scale, drag: None });
        log::info!("selection session started (scale factor {scale})");
        Ok(())
    }

    /// Tear down the live session, if any, and report why.
    ///
    /// Idle cancellation is a no-op; nothing is mounted and nothing is
    /// emitted.
    pub fn cancel(&mut self, reason: CancelReason) {
        if self.session.take().is_none() {
            return;
        }
        self.surface.unmount();
        log::info!("selection cancelled: {reason:?}");
        let _ = self
            .events
            .send(SelectionEvent::SelectionCancelled { reason });
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        // Input can only arrive from a mounted overlay, but a stale
        // event racing a teardown is ignored rather than trusted.
        if self.session.is_none() {
            return;
        }
        match event {
            InputEvent::PointerDown(point) => self.pointer_down(point),
            InputEvent::PointerMove(point) => self.pointer_move(point),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Escape => self.cancel(CancelReason::UserCancel),
        }
    }

    fn pointer_down(&mut self, point: LogicalPoint) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.drag = Some(Drag {
            anchor: point,
            current: point,
        });
        log::debug!("drag anchored at ({}, {})", point.x, point.y);
        self.redraw();
    }

    fn pointer_move(&mut self, point: LogicalPoint) {
        let Some(drag) = self.session.as_mut().and_then(|s| s.drag.as_mut()) else {
            // Moves before pointer-down show no frame.
            return;
        };
        drag.current = point;
        self.redraw();
    }

    fn pointer_up(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(drag) = session.drag.take() else {
            // Release without a press in this session; keep waiting.
            return;
        };
        let scale = session.scale;
        let rect = drag.rect();
        self.session = None;

        if rect.width < MIN_SELECTION_DIM || rect.height < MIN_SELECTION_DIM {
            log::info!(
                "selection {:.0}x{:.0} below {MIN_SELECTION_DIM} px minimum — discarded",
                rect.width,
                rect.height
            );
            self.surface.unmount();
            return;
        }

        // Teardown happens before the event so downstream capture sees
        // an unobstructed page.
        self.surface.unmount();

        let physical = to_physical(&rect, scale);
        log::info!(
            "selection complete: {}x{} at ({}, {}) device px",
            physical.width,
            physical.height,
            physical.x,
            physical.y
        );

        let events = self.events.clone();
        self.timer.schedule(SETTLE_DELAY, Box::new(move || {
            let _ = events.send(SelectionEvent::SelectionComplete {
                rect: physical,
                device_pixel_ratio: scale,
            });
        }));
    }

    fn redraw(&mut self) {
        let Some(drag) = self.session.as_ref().and_then(|s| s.drag.as_ref()) else {
            return;
        };
        let rect = drag.rect();
        let frame = SelectionFrame {
            rect,
            readout_at: readout_anchor(&rect, self.surface.viewport()),
            readout_text: format!("{} × {}", rect.width.round(), rect.height.round()),
        };
        self.surface.update_frame(&frame);
    }
}

fn sanitize_scale(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        1.0
    }
}
