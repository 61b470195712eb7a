//! Deferred-task abstraction for the settle delay.
//!
//! Between overlay teardown and the completion event the rendering
//! surface gets a moment to visually settle, so downstream capture sees
//! an unobstructed page. The contract: the task runs after at least the
//! given delay, exactly once, unconditionally — it is not cancellable.

use std::time::Duration;

pub type SettleTask = Box<dyn FnOnce() + Send + 'static>;

/// Schedules a one-shot task after a fixed delay.
pub trait SettleTimer {
    fn schedule(&self, delay: Duration, task: SettleTask);
}

/// Production timer backed by the tokio runtime.
pub struct TokioSettleTimer;

impl SettleTimer for TokioSettleTimer {
    fn schedule(&self, delay: Duration, task: SettleTask) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}
