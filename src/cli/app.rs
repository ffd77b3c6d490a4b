use super::commands::config::ConfigCommands;
use super::commands::replay::ReplayArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tv-dashboard")]
#[command(about = "A remote-control friendly home dashboard for the terminal")]
pub struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the dashboard (default)
    Run,
    /// Feed a key sequence to the navigator and print what it does
    Replay(ReplayArgs),
    /// Show or reset the configuration
    Config(ConfigCommands),
}
