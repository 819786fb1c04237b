use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::{debug, warn};
use tp_core::{
    ids::CancelToken,
    ports::{ScheduledCallback, SchedulerPort},
};

type PendingTasks = Arc<Mutex<HashMap<CancelToken, AbortHandle>>>;

/// Scheduler that runs each callback on a tokio task after its delay.
pub struct TokioScheduler {
    runtime: Handle,
    pending: PendingTasks,
}

impl TokioScheduler {
    /// Binds to the runtime of the calling task.
    ///
    /// Panics when called outside a tokio runtime, like [`Handle::current`].
    pub fn new() -> Self {
        Self::from_handle(Handle::current())
    }

    pub fn from_handle(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of callbacks that have neither fired nor been cancelled.
    pub fn pending_count(&self) -> usize {
        match self.pending.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

impl SchedulerPort for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: ScheduledCallback) -> CancelToken {
        let token = CancelToken::new();
        let pending = Arc::clone(&self.pending);
        let task_token = token.clone();

        // Hold the map lock across spawn so a zero delay cannot fire before
        // the handle is recorded.
        let mut guard = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("scheduler map poisoned, recovering");
                poisoned.into_inner()
            }
        };
        let handle = self.runtime.spawn(async move {
            sleep(delay).await;
            let still_pending = match pending.lock() {
                Ok(mut guard) => guard.remove(&task_token).is_some(),
                Err(poisoned) => poisoned.into_inner().remove(&task_token).is_some(),
            };
            if still_pending {
                debug!(token = %task_token, "scheduled callback firing");
                callback();
            }
        });
        guard.insert(token.clone(), handle.abort_handle());
        debug!(token = %token, delay_ms = delay.as_millis() as u64, "callback scheduled");
        token
    }

    fn cancel(&self, token: &CancelToken) -> bool {
        let removed = match self.pending.lock() {
            Ok(mut guard) => guard.remove(token),
            Err(poisoned) => poisoned.into_inner().remove(token),
        };
        match removed {
            Some(handle) => {
                handle.abort();
                debug!(token = %token, "scheduled callback cancelled");
                true
            }
            None => false,
        }
    }
}
