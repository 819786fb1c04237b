use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "therapai")]
#[command(about = "Guided reflection sessions in the terminal", long_about = None)]
struct Cli {
    /// TOML config file; built-in defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write logs to the platform log directory
    #[arg(long)]
    log_file: bool,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = tp_shell::bootstrap::resolve_config(cli.config.clone())?;
    if cli.print_config {
        print!("{}", tp_shell::bootstrap::render_config(&config)?);
        return Ok(());
    }

    tp_shell::init_tracing_subscriber(&config.logging, cli.log_file)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config,
        "therapai starting"
    );

    if let Err(err) = tp_shell::run_app(config).await {
        error!(error = %err, "shell exited with error");
        return Err(err);
    }
    Ok(())
}
