pub mod commands;
pub mod parser;

pub use parser::{Cli, Commands};

use crate::config::{Config, ConfigManager};
use crate::utils::{Result, SweepError};

pub fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Clean(args)) => {
            args.validate()?;
            commands::clean::execute(load_config()?, args)
        }
        Some(Commands::Preview(args)) => {
            args.validate()?;
            commands::preview::execute(load_config()?, args)
        }
        Some(Commands::Config(args)) => commands::config::execute(args),
        None => commands::clean::execute(load_config()?, parser::CleanArgs::default()),
    }
}

fn load_config() -> Result<Config> {
    ConfigManager::load_or_create()
        .map_err(|e| SweepError::config_error(format!("Failed to load config: {}", e)))
}
