//! Scheduled callback port
//!
//! Backs the presentation delays before automatic transitions. A callback
//! fires once after its delay unless its token is cancelled first.

use std::time::Duration;

use crate::ids::CancelToken;

pub type ScheduledCallback = Box<dyn FnOnce() + Send + 'static>;

pub trait SchedulerPort: Send + Sync {
    /// Runs `callback` once after `delay`.
    fn schedule(&self, delay: Duration, callback: ScheduledCallback) -> CancelToken;

    /// Cancels a pending callback. Returns `false` if it already fired or
    /// was never scheduled.
    fn cancel(&self, token: &CancelToken) -> bool;
}
