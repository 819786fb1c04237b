use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tp_core::config::AppConfig;
use tracing::{info, info_span, warn, Instrument};

use super::wiring::{wire, ShellRuntime};
use crate::adapters::Console;
use crate::commands::{parse_command, resolve, Resolved, HELP};

/// Runs the flow against stdin and stdout until the user leaves.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let runtime = wire(&config, Console::stdout());
    run_loop(runtime, BufReader::new(tokio::io::stdin())).await
}

/// Event loop over input lines, fired timers and the exit signal.
///
/// Returns when the flow requests exit, the user quits, or input ends.
/// Pending timers are cancelled on the way out.
pub async fn run_loop<R>(runtime: ShellRuntime, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let ShellRuntime {
        orchestrator,
        mut inbox,
        exit,
        renderer,
        console,
    } = runtime;
    let mut exit_rx = exit.subscribe();
    let mut lines = input.lines();

    console.print(HELP);
    renderer.render(&orchestrator.get_state().await);

    let result = async {
        loop {
            if exit.is_requested() {
                break;
            }
            tokio::select! {
                biased;

                changed = exit_rx.changed() => {
                    if changed.is_err() || *exit_rx.borrow() {
                        break;
                    }
                }
                Some(intent) = inbox.recv() => {
                    orchestrator.dispatch(intent).await;
                }
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read command input")? else {
                        info!("input closed");
                        break;
                    };
                    let command = match parse_command(&line) {
                        Ok(command) => command,
                        Err(err) => {
                            console.print(&err.to_string());
                            continue;
                        }
                    };
                    let snapshot = orchestrator.get_state().await;
                    match resolve(command, &snapshot) {
                        Resolved::Dispatch(intent) => {
                            let span = info_span!("command.dispatch", command = line.trim());
                            orchestrator.dispatch(intent).instrument(span).await;
                        }
                        Resolved::ShowState => match serde_json::to_string_pretty(&snapshot) {
                            Ok(json) => console.print(&json),
                            Err(err) => warn!(error = %err, "failed to serialize flow state"),
                        },
                        Resolved::ShowScreens => {
                            let screens = orchestrator.reachable_screens().await;
                            let names: Vec<&str> = screens.iter().map(|s| s.as_str()).collect();
                            console.print(&format!("reachable: {}", names.join(", ")));
                        }
                        Resolved::ShowHelp => console.print(HELP),
                        Resolved::Notice(text) => console.print(text),
                        Resolved::Quit => break,
                    }
                }
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    orchestrator.shutdown().await;
    info!("shell stopped");
    result
}
