use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory new notes are written to.
    pub notes_path: String,
    #[serde(default = "default_file_ext")]
    pub default_file_ext: String,
    /// strftime format used to validate and normalize dates.
    #[serde(default = "default_date_format")]
    pub default_date_format: String,
}

fn default_file_ext() -> String {
    "md".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Config {
    /// Returns the config directory path (~/.config/quill or $XDG_CONFIG_HOME/quill)
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let config_base = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .expect("No home directory found")
                    .join(".config")
            });
        Ok(config_base.join("quill"))
    }

    /// Returns the config file path (~/.config/quill/config.toml)
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the default config from ~/.config/quill/config.toml
    pub fn load_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file not found at: {}",
                config_path.display()
            ));
        }
        Self::read(&config_path)
    }

    pub fn read(config_path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
