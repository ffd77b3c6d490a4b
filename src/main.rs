use anyhow::Result;
use clap::Parser;
use log::info;

use tv_dashboard::cli::commands::{config_command, replay_command, run_command};
use tv_dashboard::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run); the dashboard owns the terminal
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("tv-dashboard.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting tv-dashboard");

    let config_path = cli.config.as_deref();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_command(config_path).await,
        Commands::Replay(args) => replay_command(args, config_path).await,
        Commands::Config(args) => config_command(args, config_path).await,
    }
}
