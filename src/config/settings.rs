use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SetEnvError};

/// Project-level configuration, loaded from `.setenv.toml`.
///
/// Every field has a default so SetEnv works without any config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// State file name (relative to the project root).
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// Rendered env file name (relative to the project root).
    #[serde(default = "default_env_file")]
    pub env_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_state_file() -> String {
    "env.json".to_string()
}

fn default_env_file() -> String {
    ".env".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            env_file: default_env_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".setenv.toml";

    /// Load settings from `<project_dir>/.setenv.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SetEnvError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    pub fn state_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.state_file)
    }

    pub fn env_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.env_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
