use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::dashboard::content::NewsCategory;
use crate::dashboard::tiles::{headline_tiles, static_tiles};
use crate::navigation::{
    Effect, FocusNavigator, NavOutcome, RecordingHost, RegionRegistry, parse_key,
};

#[derive(Args)]
pub struct ReplayArgs {
    /// Comma-separated key names, e.g. "Down,Down,Enter,Esc"
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Print the trace as JSON
    #[arg(long)]
    pub json: bool,
}

/// One replayed key and what the navigator did with it
#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub key: String,
    pub outcome: String,
    pub cursor: Option<usize>,
    pub effects: Vec<Effect>,
}

pub async fn replay_command(args: ReplayArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let steps = replay_keys(&config, &args.keys)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    for step in &steps {
        let cursor = step
            .cursor
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {} (cursor {})",
            step.key.cyan(),
            step.outcome,
            cursor.yellow()
        );
        for effect in &step.effects {
            println!("         {}", describe(effect).dimmed());
        }
    }

    Ok(())
}

/// Drive a navigator over the dashboard's tiles with a recording host.
///
/// The region set is the dashboard at startup; activations are recorded
/// but not executed.
pub fn replay_keys<S: AsRef<str>>(config: &Config, keys: &[S]) -> Result<Vec<ReplayStep>> {
    let key_map = config.key_map()?;

    let mut registry = RegionRegistry::new();
    for tile in static_tiles()
        .iter()
        .chain(headline_tiles(NewsCategory::default()).iter())
    {
        registry.register(tile.region());
    }

    let mut navigator = FocusNavigator::new(config.navigator_options());
    let mut host = RecordingHost::new();
    let mut steps = Vec::with_capacity(keys.len() + 1);

    navigator.mount(&registry, &mut host);
    steps.push(ReplayStep {
        key: "(mount)".to_string(),
        outcome: "mounted".to_string(),
        cursor: navigator.cursor(),
        effects: host.take(),
    });

    for name in keys {
        let name = name.as_ref();
        let code = parse_key(name)?;
        let outcome = match key_map.lookup(code) {
            Some(input) => navigator.handle(input, &registry, &mut host),
            None => NavOutcome::Ignored,
        };

        steps.push(ReplayStep {
            key: name.to_string(),
            outcome: summarize(&outcome),
            cursor: navigator.cursor(),
            effects: host.take(),
        });
    }

    navigator.unmount();
    Ok(steps)
}

fn summarize(outcome: &NavOutcome) -> String {
    match outcome {
        NavOutcome::Moved { from, to, id } => format!("moved {} -> {} ({})", from, to, id),
        NavOutcome::Activated(id) => format!("activated {}", id),
        NavOutcome::Cancelled => "cancelled".to_string(),
        NavOutcome::Ignored => "ignored".to_string(),
    }
}

fn describe(effect: &Effect) -> String {
    match effect {
        Effect::ScrollIntoView { id, options } => {
            format!("scroll {} ({:?}, {:?})", id, options.behavior, options.block)
        }
        Effect::Focus { id } => format!("focus {}", id),
        Effect::Activate { id } => format!("activate {}", id),
        Effect::FocusRoot => "focus root".to_string(),
    }
}
