//! Configuration handling for the TUI

use crate::state::{FormOptions, ValidationMode};
use crate::validation::DEFAULT_DECIMALS;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Fractional digits allowed in the amount field
    pub decimals: Option<u8>,
    /// Validation mode of the left pane
    pub live_mode: Option<ValidationMode>,
    /// Validation mode of the right pane
    pub deferred_mode: Option<ValidationMode>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "tokenform", "token-form-tui")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("token-form-tui.log"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let display = path.display();
        let content = fs::read_to_string(path).context(format!("reading {display}"))?;
        let config: TuiConfig =
            serde_json::from_str(&content).context(format!("parsing {display}"))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.unwrap_or(DEFAULT_DECIMALS)
    }

    /// Options for the left pane
    pub fn live_options(&self) -> FormOptions {
        FormOptions {
            mode: self.live_mode.unwrap_or(ValidationMode::OnChange),
            decimals: self.decimals(),
        }
    }

    /// Options for the right pane
    pub fn deferred_options(&self) -> FormOptions {
        FormOptions {
            mode: self.deferred_mode.unwrap_or(ValidationMode::OnSubmit),
            decimals: self.decimals(),
        }
    }
}
