//! Infrastructure adapters for TherapAI.

pub mod time;

pub use time::TokioScheduler;
