use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod manager;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub git: GitConfig,
    pub cleanup: CleanupConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GitConfig {
    /// Extra never-delete branch names on top of the built-in set.
    pub protected_branches: Vec<String>,
    /// Run `git fetch --prune` before classifying.
    pub fetch_prune: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CleanupConfig {
    pub stale_threshold_days: u32,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.cleanup.stale_threshold_days == 0 {
            return Err(ConfigError::Validation(
                "stale_threshold_days must be at least 1".to_string(),
            ));
        }

        for name in &self.git.protected_branches {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "protected branch names cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Effective stale threshold: the SWEEP_STALE_DAYS environment variable
    /// overrides the configured value when it parses to a positive number.
    pub fn stale_threshold_days(&self) -> u32 {
        if let Ok(value) = std::env::var("SWEEP_STALE_DAYS") {
            if let Ok(days) = value.parse::<u32>() {
                if days > 0 {
                    return days;
                }
            }
        }

        self.cleanup.stale_threshold_days
    }
}
