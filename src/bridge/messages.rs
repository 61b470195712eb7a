//! Wire types for the host-controller protocol.
//!
//! The envelope is `action`-tagged camelCase JSON, matching the
//! protocol the host controller already speaks. Commands flow in and
//! are always acknowledged; events flow out fire-and-forget.

use serde::{Deserialize, Serialize};

use crate::geometry::PhysicalRect;

/// Inbound commands, host → core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Command {
    /// Begin a selection session (tearing down any active one first).
    StartSelection,
    /// Force teardown back to idle; a no-op when already idle.
    CancelSelection,
    /// Liveness probe; never touches session state.
    Ping,
}

/// Synchronous acknowledgment for an inbound command.
///
/// Every command gets exactly one ack, so the host is never left
/// waiting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Ack {
    Result { success: bool },
    Status { status: &'static str },
}

impl Ack {
    pub fn success() -> Self {
        Ack::Result { success: true }
    }

    pub fn failure() -> Self {
        Ack::Result { success: false }
    }

    pub fn pong() -> Self {
        Ack::Status { status: "pong" }
    }
}

/// Why a session was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// The user pressed Escape.
    UserCancel,
    /// The host controller sent `cancelSelection` mid-session.
    ExternalCancel,
}

/// Outbound events, core → host. Fire-and-forget, no response expected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum SelectionEvent {
    /// A selection finished; `rect` is in device pixels.
    ///
    /// `device_pixel_ratio` is the scale factor sampled at session
    /// start — the wire name matches the historical protocol.
    #[serde(rename_all = "camelCase")]
    SelectionComplete {
        rect: PhysicalRect,
        device_pixel_ratio: f64,
    },
    /// A session was torn down without completing.
    SelectionCancelled { reason: CancelReason },
}
