//! Application configuration domain model.
//!
//! Pure data plus structural validation. Loading from disk happens in the
//! host shell.

mod app_config;

pub use app_config::{AppConfig, ConfigError, FlowConfig, LoggingConfig, QuestionsConfig};
