//! Flow domain module.
//!
//! The flow is a two-level state machine: an outer stack of screens gated
//! behind the onboarding and premium flags, and an inner prompt cursor that
//! lives inside the `Questions` screen.

mod action;
mod activity;
pub mod graph;
mod intent;
mod screen;
mod snapshot;
mod stack;
mod state;
pub mod state_machine;

pub use action::FlowAction;
pub use activity::Activity;
pub use graph::{Edge, EdgeKind, FlowGraph};
pub use intent::FlowIntent;
pub use screen::Screen;
pub use snapshot::FlowSnapshot;
pub use stack::NavigationStack;
pub use state::{FlowState, Transition};
pub use state_machine::FlowStateMachine;
