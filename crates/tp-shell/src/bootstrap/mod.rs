//! Process bootstrap: configuration, tracing, wiring and the event loop.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, render_config, resolve_config};
pub use run::{run_app, run_loop};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire, ShellRuntime};
