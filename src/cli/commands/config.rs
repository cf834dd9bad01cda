use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::{defaults, ConfigManager};
use crate::utils::{Result, SweepError};

pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let config = ConfigManager::load_or_create()
                .map_err(|e| SweepError::config_error(e.to_string()))?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommands::Path => {
            println!("{}", ConfigManager::get_config_path());
        }
        ConfigCommands::Reset => {
            ConfigManager::save(&defaults::default_config())
                .map_err(|e| SweepError::config_error(e.to_string()))?;
            println!("Configuration reset to defaults.");
        }
    }

    Ok(())
}
