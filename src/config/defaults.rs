use super::{CleanupConfig, Config, GitConfig};

pub fn default_config() -> Config {
    Config {
        git: GitConfig {
            protected_branches: Vec::new(),
            fetch_prune: true,
        },
        cleanup: CleanupConfig {
            stale_threshold_days: 30,
        },
    }
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "sweep") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        std::path::PathBuf::from(".config").join("sweep")
    }
}

pub fn get_config_file_path() -> std::path::PathBuf {
    // Allow environment variable override for config path (used in tests)
    if let Ok(config_path) = std::env::var("SWEEP_CONFIG_PATH") {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = default_config();
        assert_eq!(config.cleanup.stale_threshold_days, 30);
        assert!(config.git.fetch_prune);
        assert!(config.git.protected_branches.is_empty());
    }

    #[test]
    fn test_config_paths() {
        let config_file = get_config_file_path();
        assert!(config_file.parent().is_some());

        let config_dir = get_default_config_dir();
        assert!(!config_dir.as_os_str().is_empty());
    }
}
