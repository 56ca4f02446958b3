use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::DEFAULT_PRECISION;

/// Errors that can occur while reading or writing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returns the path to the settings file: `~/.config/fourier-epicycles/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("fourier-epicycles");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Only preferences are stored, never drawings.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub precision: usize,
    pub duration_secs: f64,
    pub line_width: f32,
    pub show_samples_while_animating: bool,
    pub show_settings: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            duration_secs: 3.0,
            line_width: 1.0,
            show_samples_while_animating: false,
            show_settings: true,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk, logging any failure.
    pub fn save(&self) {
        if let Err(e) = self.save_to(&settings_path()) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Holds back settings writes while a pointer button is down
///
/// A dragged slider reports a change every frame; the file is written
/// once, on the first frame after the button is released.
#[derive(Debug, Default)]
pub struct SaveGate {
    dirty: bool,
}

impl SaveGate {
    /// Record that settings changed
    pub fn mark(&mut self) {
        self.dirty = true;
    }

    /// Whether to save now; clears the pending change when it returns `true`
    pub fn ready(&mut self, pointer_down: bool) -> bool {
        if self.dirty && !pointer_down {
            self.dirty = false;
            true
        } else {
            false
        }
    }
}
