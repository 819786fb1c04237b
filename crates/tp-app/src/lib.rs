//! TherapAI Application Orchestration Layer
//!
//! This crate drives the flow state machine and routes its side effects to
//! the host through ports.

pub mod usecases;

pub use usecases::flow::{intent_channel, FlowOrchestrator, IntentReceiver, IntentSender};
