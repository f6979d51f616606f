use std::fs;
use std::path::{Path, PathBuf};

pub mod user;

pub use user::UserConfig;

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("lyrics-overlay")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    /// Default log location; the terminal belongs to the UI so logs go to disk.
    pub fn get_log_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(Self::get_config_dir)
            .join("lyrics-overlay")
            .join("lyrics-overlay.log")
    }

    /// Load `config.toml`. The file is never written back.
    pub fn load() -> UserConfig {
        Self::load_from(&Self::get_config_path())
    }

    /// Missing file means defaults; a broken one also means defaults, with a warning.
    pub fn load_from(path: &Path) -> UserConfig {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return UserConfig::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config, using defaults");
                return UserConfig::default();
            }
        };

        match toml::from_str::<UserConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                UserConfig::default()
            }
        }
    }

    /// Default config as TOML, for `--generate-config`.
    pub fn default_toml() -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(&UserConfig::default())?)
    }
}
