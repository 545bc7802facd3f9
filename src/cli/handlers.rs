use std::path::Path;

use tracing::info;

use crate::cli::commands::Cli;
use crate::io::config_io::{self, ConfigError};
use crate::io::logging;
use crate::model::config::Config;

/// Load config for this invocation and apply command-line overrides
pub fn resolve_config(cli: &Cli, cwd: &Path) -> Result<Config, ConfigError> {
    let mut config = config_io::load_config(cli.config.as_deref(), cwd)?;
    if let Some(path) = &cli.log_file {
        config.log.file = Some(path.clone());
    }
    Ok(config)
}

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(&cli, &cwd)?;
    if logging::init_logging(&config.log)? {
        info!(seeds = cli.task.len(), "logging initialized");
    }
    crate::tui::run(&config, &cli.task)
}
