//! Selection domain — public API.
//!
//! Owns the one mutable thing in the crate: the live selection session.

mod machine;
mod timer;

pub use machine::{InputEvent, SelectionMachine, MIN_SELECTION_DIM, SETTLE_DELAY};
pub use timer::{SettleTask, SettleTimer, TokioSettleTimer};
