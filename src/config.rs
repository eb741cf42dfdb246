//! UI configuration
//!
//! Layout constants that used to be hard-coded live in a small JSON file so
//! they can be tuned without recompiling. Every field has a default, so an
//! empty object (or no file at all) is a valid configuration.
//!
//! ```json
//! { "scale": 4, "window": { "width": 1280, "height": 720 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;

/// Directory name used under the platform config dir
const APP_DIR: &str = "monster-battle-ui";
const CONFIG_FILE: &str = "ui.json";
/// Largest pixel scale honored; bigger values are clamped
pub const MAX_SCALE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Slot Render Test".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pixel scale applied to sprites and bar sizes
    pub scale: u32,
    /// Bitmap font scale for name labels (1 = 5x7 glyphs)
    pub name_text_scale: u32,
    /// Frames per second the harness loop is capped at
    pub target_fps: u32,
    pub window: WindowConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            scale: 4,
            name_text_scale: 2,
            target_fps: 60,
            window: WindowConfig::default(),
        }
    }
}

impl UiConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Per-user config location, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Resolves the configuration for the harness
    ///
    /// An explicit path must load. Otherwise the per-user file is used when it
    /// exists, and the built-in defaults when it does not.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "loading UI config");
            return Self::load_from_file(path);
        }

        match Self::user_config_path() {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "loading user UI config");
                Self::load_from_file(path)
            }
            _ => {
                debug!("no UI config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Scale clamped to `1..=MAX_SCALE`
    pub fn effective_scale(&self) -> u32 {
        self.scale.clamp(1, MAX_SCALE)
    }

    /// Name label scale, clamped like [`UiConfig::effective_scale`]
    pub fn effective_text_scale(&self) -> u32 {
        self.name_text_scale.clamp(1, MAX_SCALE)
    }
}
