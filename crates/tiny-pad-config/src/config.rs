/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{ArgbColor, FontSpec};

pub const CONFIG_FILE_NAME: &str = "tiny-pad.json";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub font: FontSpec,
    pub text_color: ArgbColor,
    /// State of the autosave toggle. Only drives the tooltip.
    pub auto_save_enabled: bool,
    /// Whether Exit saves the document before closing.
    pub save_on_exit: bool,
    /// Whether to remember the last folder used in open/save dialogs.
    pub remember_last_folder: bool,
    /// Default working folder for file dialogs. Empty = user's home directory.
    pub default_work_folder: String,
    /// Last folder used in an open/save dialog.
    pub last_used_folder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            text_color: ArgbColor::default(),
            auto_save_enabled: false,
            save_on_exit: false,
            remember_last_folder: true,
            default_work_folder: String::new(),
            last_used_folder: String::new(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path: exe directory + `tiny-pad.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config: {e:#}");
            }
            return config;
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                // Leave the broken file alone so the user can fix it
                tracing::warn!("Falling back to default config: {e:#}");
                Self::default()
            }
        }
    }

    /// Reads and sanitizes the config at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    /// Saves config to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write config at {}", path.display()))
    }

    /// Returns the effective starting directory for file dialogs.
    ///
    /// Resolution order:
    /// 1. `last_used_folder` (if `remember_last_folder` is true and the path exists)
    /// 2. `default_work_folder` (if non-empty and the path exists)
    /// 3. User's home directory
    pub fn resolve_work_folder(&self) -> Option<PathBuf> {
        if self.remember_last_folder && !self.last_used_folder.is_empty() {
            let p = PathBuf::from(&self.last_used_folder);
            if p.is_dir() {
                return Some(p);
            }
        }
        if !self.default_work_folder.is_empty() {
            let p = PathBuf::from(&self.default_work_folder);
            if p.is_dir() {
                return Some(p);
            }
        }
        dirs::home_dir()
    }

    /// Records the parent of `file_path` as the last used folder.
    pub fn remember_folder_of(&mut self, file_path: &Path) {
        if !self.remember_last_folder {
            return;
        }
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.last_used_folder = parent.to_string_lossy().into_owned();
            }
        }
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.font.sanitize();
        self.default_work_folder = self.default_work_folder.trim().to_string();
    }
}
