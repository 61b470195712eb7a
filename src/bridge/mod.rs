//! Boundary message bridge — the host controller's view of the core.
//!
//! Translates between the host's `action`-tagged envelopes and the
//! state machine's transitions. Every inbound command is acknowledged,
//! even when the work behind it failed; the host is never left waiting.

mod messages;

pub use messages::{Ack, CancelReason, Command, SelectionEvent};

use crate::overlay::OverlaySurface;
use crate::selection::{InputEvent, SelectionMachine, SettleTimer};
use tokio::sync::mpsc::UnboundedSender;

pub struct SelectionBridge<S: OverlaySurface> {
    machine: SelectionMachine<S>,
}

impl<S: OverlaySurface> SelectionBridge<S> {
    /// Wire a bridge over `surface`. Outbound events are delivered
    /// fire-and-forget on `events`; completion emissions are deferred
    /// through `timer`.
    pub fn new(
        surface: S,
        timer: Box<dyn SettleTimer>,
        events: UnboundedSender<SelectionEvent>,
    ) -> Self {
        Self {
            machine: SelectionMachine::new(surface, timer, events),
        }
    }

    /// Dispatch one inbound command and produce its acknowledgment.
    pub fn handle(&mut self, command: Command) -> Ack {
        match command {
            Command::StartSelection => match self.machine.start() {
                Ok(()) => Ack::success(),
                Err(e) => {
                    // Environment unavailability is an acked failure,
                    // never a propagated error.
                    log::warn!("could not start selection: {e}");
                    Ack::failure()
                }
            },
            Command::CancelSelection => {
                self.machine.cancel(CancelReason::ExternalCancel);
                Ack::success()
            }
            Command::Ping => Ack::pong(),
        }
    }

    /// JSON envelope form of [`handle`](Self::handle): decode the
    /// command, dispatch it, encode the ack.
    pub fn handle_raw(&mut self, payload: &str) -> Result<String, BridgeError> {
        let command: Command = serde_json::from_str(payload).map_err(BridgeError::Envelope)?;
        log::debug!("inbound command: {command:?}");
        let ack = self.handle(command);
        serde_json::to_string(&ack).map_err(BridgeError::Encode)
    }

    /// Forward pointer/keyboard input from the mounted surface.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.machine.handle_input(event);
    }

    pub fn is_selecting(&self) -> bool {
        self.machine.is_selecting()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("malformed command envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("failed to encode acknowledgment: {0}")]
    Encode(#[source] serde_json::Error),
}
