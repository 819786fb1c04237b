//! Port interfaces for the application layer
//!
//! Ports define the contract between the flow orchestrator and the host or
//! infrastructure implementations, so the flow logic stays independent of
//! timers, terminals and windows.

mod exit;
mod flow_event;
mod scheduler;

pub use exit::ExitPort;
pub use flow_event::FlowEventPort;
pub use scheduler::{ScheduledCallback, SchedulerPort};
