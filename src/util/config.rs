use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::validation::{DEFAULT_FIELD_NAME, PasswordPolicy};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub password: PasswordPolicy,
    #[serde(default)]
    pub forms: FormsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default = "default_field_name")]
    pub default_field_name: String,
}

fn default_field_name() -> String {
    DEFAULT_FIELD_NAME.to_string()
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            default_field_name: default_field_name(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/formcheck/config.toml (standard XDG on all platforms)
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/formcheck/config.toml"));
        }

        // 2. Platform-specific path from `directories` crate
        if let Some(proj_dirs) = ProjectDirs::from("", "", "formcheck") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;
        config
            .password
            .check()
            .with_context(|| format!("Invalid password policy in {}", path.display()))?;

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "formcheck") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/formcheck/logs")
    }
}
