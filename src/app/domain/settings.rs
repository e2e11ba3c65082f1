use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::format::{FontSize, FormatState, Rgb};
use crate::app::infrastructure::error::{AppError, Result};

/// Startup defaults. Read once at launch and never written back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Hex `#rrggbb` or a basic color name
    #[serde(default = "default_font_color")]
    pub font_color: String,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

fn default_font_family() -> String {
    "Courier".to_string()
}

fn default_font_size() -> u32 {
    12
}

fn default_font_color() -> String {
    "#000000".to_string()
}

fn default_word_wrap() -> bool {
    true
}

fn default_window_width() -> i32 {
    800
}

fn default_window_height() -> i32 {
    600
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_color: default_font_color(),
            word_wrap_enabled: default_word_wrap(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// A missing file yields defaults. A malformed file is logged and also
    /// yields defaults, so a bad config never keeps the editor from starting.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::get_config_path);

        match Self::load_from(&config_path) {
            Ok(Some(settings)) => {
                log::debug!("Loaded settings from {}", config_path.display());
                settings.validated()
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::read(path, e)),
        };
        let settings = serde_json::from_str(&contents)?;
        Ok(Some(settings))
    }

    /// Bring out-of-range values back to something the editor can display.
    pub fn validated(mut self) -> Self {
        let size = FontSize::clamped(self.font_size);
        if size.get() != self.font_size {
            log::warn!("Font size {} out of range, using {}", self.font_size, size);
            self.font_size = size.get();
        }
        if let Err(e) = self.font_color.parse::<Rgb>() {
            log::warn!("{}, using {}", e, default_font_color());
            self.font_color = default_font_color();
        }
        if self.font_family.trim().is_empty() {
            self.font_family = default_font_family();
        }
        self.window_width = self.window_width.max(200);
        self.window_height = self.window_height.max(150);
        self
    }

    /// Initial format state described by these settings.
    pub fn format(&self) -> FormatState {
        FormatState {
            font_family: self.font_family.clone(),
            font_size: FontSize::clamped(self.font_size),
            color: self.font_color.parse().unwrap_or_default(),
        }
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ferrisnote");
        path.push("settings.json");
        path
    }
}
