pub mod cli;
pub mod core;

use crate::core::SystemClock;
use crate::core::config::AppConfig;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Status { currency: Option<String> },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("daybudget starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Status { currency } => {
            cli::status::run(&config, Arc::new(SystemClock), currency.as_deref())
        }
    }
}
