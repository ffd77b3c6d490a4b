use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use log::info;
use std::path::Path;

use crate::config::Config;
use crate::navigation::NavInput;
use crate::ui::prompts::prompt_confirmation;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show the effective configuration and key bindings
    Show,
    /// Print the config file location
    Path,
    /// Reset the configuration to default values
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn config_command(args: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigSubcommands::Show => show_command(config_path),
        ConfigSubcommands::Path => {
            let path = match config_path {
                Some(path) => path.to_path_buf(),
                None => Config::get_config_path()?,
            };
            println!("{}", path.display());
            Ok(())
        }
        ConfigSubcommands::Reset { force } => reset_command(config_path, force),
    }
}

fn show_command(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let keys = config.key_map()?;

    println!("{}", "Configuration".bold());
    println!("{}", config.to_toml()?);

    println!("{}", "Key bindings".bold());
    for input in [
        NavInput::Up,
        NavInput::Down,
        NavInput::Left,
        NavInput::Right,
        NavInput::Activate,
        NavInput::Cancel,
    ] {
        println!(
            "  {:<10} {}",
            input.label().cyan(),
            keys.keys_for(input).join(", ")
        );
    }

    Ok(())
}

/// Reset all settings to default values
///
/// # Arguments
/// * `force` - Skip confirmation prompt
fn reset_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    info!("Resetting config to defaults");

    if !force && !prompt_confirmation("Reset all settings to their default values?", false)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let path = Config::default().save(config_path)?;
    println!("{} {}", "Config reset:".green(), path.display());

    Ok(())
}
