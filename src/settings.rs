//! Viewer settings persisted as JSON in the platform config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::color::{Color, parse_palette};
use crate::constants::{
    DEFAULT_HIGHLIGHT_COLOR, DEFAULT_LOG_FILTER, DEFAULT_PALETTE_HEX, MIN_DRAW_SIZE,
    SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::error::LabelResult;

/// User-tunable viewer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Minimum width and height (percent) for a redraw to commit
    pub min_draw_size: f32,
    /// Field colors as `#rrggbb`, allocated in order
    pub palette: Vec<String>,
    /// Outline for the armed label and the live draw box
    pub highlight_color: String,
    /// `tracing` filter directive used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            min_draw_size: MIN_DRAW_SIZE,
            palette: DEFAULT_PALETTE_HEX.iter().map(|s| s.to_string()).collect(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ViewerSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Self::default(),
        }
    }

    /// Load from `path`, logging and returning defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> LabelResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> LabelResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Save to the default location, if the platform has one
    pub fn save(&self) -> LabelResult<()> {
        match default_settings_path() {
            Some(path) => self.save_to(&path),
            None => Err("No config directory available".into()),
        }
    }

    /// Parsed palette
    pub fn palette_colors(&self) -> LabelResult<Vec<Color>> {
        parse_palette(&self.palette)
    }
}

/// `<config dir>/labelview/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
