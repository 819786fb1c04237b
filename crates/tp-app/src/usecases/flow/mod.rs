//! Flow use cases.
//!
//! This module exposes the flow orchestrator and the intent inbox that
//! scheduled callbacks deliver into.

mod context;
pub mod orchestrator;

pub use orchestrator::{intent_channel, FlowOrchestrator, IntentReceiver, IntentSender};
