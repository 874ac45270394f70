// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Mask appearance and output settings, loaded from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app::host::Color;
use crate::constant::{CONFIG_DIR, CONFIG_FILE};

/// User-tunable settings for the selection mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Color laid over everything outside the selection.
    pub backdrop_color: Color,
    /// Color of the dashed border, the corner dots and the button captions.
    pub stroke_color: Color,
    /// Background of the button plates.
    pub button_color: Color,
    /// Dash length and gap length of the border.
    pub dash_pattern: [f32; 2],
    /// Border line width.
    pub border_width: f32,
    /// Diameter of the dots drawn at the four corners.
    pub corner_diameter: f32,
    /// Whether border, handles and buttons are shown when the mask opens.
    pub chrome_visible_on_open: bool,
    /// Directory shared snapshots are written to.
    pub output_dir: Option<PathBuf>,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            backdrop_color: Color::BLACK.with_alpha(0.6),
            stroke_color: Color::WHITE,
            button_color: Color::from_rgba(0.5, 0.5, 0.5, 0.5),
            dash_pattern: [8.0, 5.0],
            border_width: 1.0,
            corner_diameter: 6.0,
            chrome_visible_on_open: true,
            output_dir: dirs::picture_dir(),
        }
    }
}

impl MaskConfig {
    /// Default location of the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load the config from its default location.
    pub fn load_default() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::load(&path)
    }

    /// Load the config from `path`, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("Failed to read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Directory for shared snapshots: configured, pictures, or current dir.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::picture_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
