//! Settings persistence.
//!
//! Settings live in a TOML file in the platform config folder:
//! - macOS: ~/Library/Application Support/com.reporting.Report Studio/
//! - Windows: %APPDATA%/reporting/Report Studio/config/
//! - Linux: ~/.config/reportstudio/
//!
//! Every section and field is optional; anything missing takes its default.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rpt_client::ClientSettings;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::logging::LoggingSettings;
use crate::repository::LatencyProfile;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "reporting";
const APP_NAME: &str = "Report Studio";
const CONFIG_FILENAME: &str = "settings.toml";

/// Everything configurable, one section per concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the filters API lives.
    pub api: ClientSettings,
    /// Artificial delays of the simulated report backend.
    pub latency: LatencyProfile,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Default location of the settings file.
    ///
    /// Returns `None` if the platform config directory cannot be determined.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load settings from `path`, using defaults if the file is missing or
    /// cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No settings file found, using defaults");
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Settings`] if the file cannot be read or is not
    /// valid TOML for these settings.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| settings_error(path, e))?;
        toml::from_str(&content).map_err(|e| settings_error(path, e))
    }

    /// Write settings to `path` as TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Settings`] if serialization or any file system
    /// step fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| settings_error(path, e))?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| settings_error(path, e))?;
        fs::write(path, content).map_err(|e| settings_error(path, e))?;

        tracing::info!(path = %path.display(), "Saved settings");
        Ok(())
    }
}

fn settings_error(path: &Path, err: impl std::fmt::Display) -> StoreError {
    StoreError::Settings {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
