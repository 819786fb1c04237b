//! # tp-core
//!
//! Core domain models and navigation logic for TherapAI.
//!
//! This crate contains the flow controller, its pure state machine and the
//! port traits the application layer drives. It has no runtime or I/O
//! dependencies.

// Public module exports
pub mod config;
pub mod content;
pub mod flow;
pub mod ids;
pub mod onboarding;
pub mod ports;
pub mod premium;
pub mod questions;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use flow::{
    Activity, FlowAction, FlowIntent, FlowSnapshot, FlowState, FlowStateMachine,
    NavigationStack, Screen, Transition,
};
pub use ids::CancelToken;
