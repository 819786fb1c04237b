use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tp_core::flow::FlowState;

/// Flow state shared between host commands and fired timers.
///
/// Two locks, always taken in this order:
/// - `dispatch_lock` for the whole of a dispatch, so a timer intent never
///   interleaves with a command between transition and state write.
/// - `state` for short reads and the single write at the end of a dispatch.
///
/// Queries go through [`FlowContext::read`] and never take `dispatch_lock`,
/// so `state`/`screens` stay responsive while a dispatch awaits its ports.
pub struct FlowContext {
    state: Mutex<FlowState>,
    dispatch_lock: Mutex<()>,
}

impl FlowContext {
    pub fn new(initial_state: FlowState) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
        })
    }

    /// Owned copy for the pure transition, which takes the state by value.
    /// The prompt list is behind an `Arc`, so the copy stays small.
    pub async fn get_state(&self) -> FlowState {
        self.state.lock().await.clone()
    }

    /// Projects the state without copying it.
    pub async fn read<R>(&self, f: impl FnOnce(&FlowState) -> R) -> R {
        f(&*self.state.lock().await)
    }

    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call while holding `dispatch_lock`.
    pub async fn set_state(&self, state: FlowState) {
        *self.state.lock().await = state;
    }
}
