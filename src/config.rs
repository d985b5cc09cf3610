use std::path::{Path, PathBuf};

use egui::{Color32, Vec2, vec2};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "MAKO_PAINT_CONFIG";

/// Startup settings. Every field has a default, so a config file only needs
/// the values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Linear scale of an export relative to the canvas
    pub export_scale: u32,
    pub export_path: PathBuf,
    /// Font size of a sticker per unit of the user-facing sticker size
    pub sticker_size_multiplier: f32,
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    pub default_hue: f32,
    /// Glyphs offered as one-click stickers
    pub stickers: Vec<String>,
    pub default_sticker_size: f32,
    /// Canvas backdrop and export fill, as RGB
    pub background: [u8; 3],
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            title: "Mako Paint 🎨".to_owned(),
            canvas_width: 256,
            canvas_height: 256,
            export_scale: 4,
            export_path: PathBuf::from("mako_paint.png"),
            sticker_size_multiplier: 10.0,
            thin_thickness: 2.0,
            thick_thickness: 6.0,
            default_hue: 0.0,
            stickers: vec!["🔥".to_owned(), "⭐".to_owned(), "🌈".to_owned()],
            default_sticker_size: 3.0,
            background: [255, 255, 255],
        }
    }
}

impl PaintConfig {
    /// Read a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when the variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                warn!("Ignoring config {}: {err}", Path::new(&path).display());
                Self::default()
            }
        }
    }

    pub fn canvas_size(&self) -> Vec2 {
        vec2(self.canvas_width as f32, self.canvas_height as f32)
    }

    pub fn export_size(&self) -> (u32, u32) {
        (
            self.canvas_width.saturating_mul(self.export_scale),
            self.canvas_height.saturating_mul(self.export_scale),
        )
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }
}
