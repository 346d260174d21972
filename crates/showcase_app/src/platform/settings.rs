use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use showcase_core::{VisibilitySupport, DEFAULT_PAGE_SIZE};
use showcase_logging::{showcase_info, showcase_warn};

use super::ui::constants::DEFAULT_VIEWPORT_ROWS;

pub const SETTINGS_FILENAME: &str = "showcase.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisibilityMode {
    #[default]
    Observer,
    Manual,
}

impl From<VisibilityMode> for VisibilitySupport {
    fn from(mode: VisibilityMode) -> Self {
        match mode {
            VisibilityMode::Observer => VisibilitySupport::Observer,
            VisibilityMode::Manual => VisibilitySupport::Manual,
        }
    }
}

/// Runtime settings read from an optional RON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_size: usize,
    pub strict_filters: bool,
    pub reject_bad_dates: bool,
    pub viewport_rows: usize,
    pub visibility: VisibilityMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            strict_filters: false,
            reject_bad_dates: false,
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
            visibility: VisibilityMode::Observer,
        }
    }
}

/// Missing or malformed files fall back to defaults.
pub(crate) fn load_settings(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            showcase_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => {
            showcase_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            showcase_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}
