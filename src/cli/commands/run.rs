use anyhow::Result;
use log::info;
use std::path::Path;

use crate::config::Config;
use crate::dashboard::{self, Dashboard};

/// Launch the interactive dashboard
pub async fn run_command(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let mut dashboard = Dashboard::new(&config)?;

    info!("Launching dashboard ({} theme)", config.ui.theme.label());
    dashboard::run(&mut dashboard, config.ui.frame_ms).await
}
