use std::sync::Arc;

use tp_app::{intent_channel, FlowOrchestrator, IntentReceiver};
use tp_core::config::AppConfig;
use tp_core::flow::FlowState;
use tp_infra::TokioScheduler;
use tracing::info;

use crate::adapters::{Console, ShellExit, TerminalRenderer};

/// Everything the event loop needs, wired from one configuration.
pub struct ShellRuntime {
    pub orchestrator: Arc<FlowOrchestrator>,
    pub inbox: IntentReceiver,
    pub exit: Arc<ShellExit>,
    pub renderer: Arc<TerminalRenderer>,
    pub console: Console,
}

/// Builds the orchestrator and its adapters.
///
/// Must run inside a tokio runtime; the scheduler binds to it.
pub fn wire(config: &AppConfig, console: Console) -> ShellRuntime {
    let scheduler = Arc::new(TokioScheduler::new());
    let renderer = Arc::new(TerminalRenderer::new(console.clone()));
    let exit = Arc::new(ShellExit::new());
    let (inbox_tx, inbox) = intent_channel();

    let prompts = config.prompt_set();
    info!(
        prompts = prompts.len(),
        preparing_delay_ms = config.flow.preparing_delay_ms,
        analyzing_delay_ms = config.flow.analyzing_delay_ms,
        "wiring flow orchestrator"
    );

    let orchestrator = Arc::new(FlowOrchestrator::new(
        FlowState::new(prompts),
        config.flow.clone(),
        scheduler,
        renderer.clone(),
        exit.clone(),
        inbox_tx,
    ));

    ShellRuntime {
        orchestrator,
        inbox,
        exit,
        renderer,
        console,
    }
}
