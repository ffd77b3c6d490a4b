pub mod config;
pub mod replay;
pub mod run;

pub use config::{ConfigCommands, config_command};
pub use replay::{ReplayArgs, replay_command};
pub use run::run_command;
