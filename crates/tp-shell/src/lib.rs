//! # tp-shell
//!
//! Terminal host for the TherapAI flow: configuration loading, tracing
//! bootstrap, text commands and the event loop that feeds the orchestrator.

pub mod adapters;
pub mod bootstrap;
pub mod commands;

pub use bootstrap::{init_tracing_subscriber, load_config, run_app};
