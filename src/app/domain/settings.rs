use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::platform::detect_system_color_mode;

use super::notice::DEFAULT_NOTICE_DURATION;
use super::source::SourceDefaults;
use super::view::ColorMode;

/// Color mode the window opens with. Toggling at runtime is not saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

impl ThemeMode {
    pub fn resolve(self) -> ColorMode {
        match self {
            Self::Light => ColorMode::Light,
            Self::Dark => ColorMode::Dark,
            Self::SystemDefault => detect_system_color_mode(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontChoice {
    ScreenBold,
    Courier,
    HelveticaMono,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_true")]
    pub line_numbers_enabled: bool,

    #[serde(default = "default_true")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_true")]
    pub highlighting_enabled: bool,

    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Start empty panes with a small skeleton instead of nothing
    #[serde(default)]
    pub starter_templates: bool,

    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u64,

    /// Override for the key-value store file
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_font() -> FontChoice {
    FontChoice::Courier
}

fn default_font_size() -> u32 {
    18
}

fn default_notice_duration_ms() -> u64 {
    DEFAULT_NOTICE_DURATION.as_millis() as u64
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            line_numbers_enabled: default_true(),
            word_wrap_enabled: default_true(),
            highlighting_enabled: default_true(),
            theme_mode: default_theme_mode(),
            font: default_font(),
            font_size: default_font_size(),
            starter_templates: false,
            notice_duration_ms: default_notice_duration_ms(),
            storage_path: None,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, writing defaults if missing
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    tracing::warn!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if self.font_size == 0 {
            return Err(AppError::Settings("font size must be positive".to_string()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("codepad");
        path.push("settings.json");
        path
    }

    /// Where the three sources are persisted
    pub fn storage_file(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(|| {
            let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("codepad");
            path.push("storage.json");
            path
        })
    }

    pub fn source_defaults(&self) -> SourceDefaults {
        if self.starter_templates {
            SourceDefaults::starter()
        } else {
            SourceDefaults::empty()
        }
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            font: self.font,
            font_size: self.font_size as i32,
            line_numbers: self.line_numbers_enabled,
            word_wrap: self.word_wrap_enabled,
            ..EditorOptions::default()
        }
    }
}

/// Configuration handed to each editor pane.
///
/// FLTK's `TextEditor` has no minimap and stops scrolling at the last line,
/// so those two options hold by construction and are not carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub font: FontChoice,
    pub font_size: i32,
    pub line_numbers: bool,
    pub word_wrap: bool,
    /// Resize the panes with the window
    pub automatic_layout: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            font: default_font(),
            font_size: default_font_size() as i32,
            line_numbers: true,
            word_wrap: true,
            automatic_layout: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font_size, 18);
        assert!(settings.line_numbers_enabled);
        assert!(settings.word_wrap_enabled);
        assert!(settings.highlighting_enabled);
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.font, FontChoice::Courier);
        assert!(!settings.starter_templates);
        assert_eq!(settings.notice_duration(), Duration::from_millis(3000));
        assert!(settings.storage_path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"line_numbers_enabled": false}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 18);
        assert!(!settings.line_numbers_enabled);
        assert_eq!(settings.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_serialization() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Dark\""));
        assert_eq!(settings.theme_mode.resolve(), ColorMode::Dark);
        assert_eq!(ThemeMode::Light.resolve(), ColorMode::Light);
    }

    #[test]
    fn test_editor_options_follow_settings() {
        let settings = AppSettings {
            font_size: 14,
            word_wrap_enabled: false,
            ..Default::default()
        };
        let options = settings.editor_options();
        assert_eq!(options.font_size, 14);
        assert!(!options.word_wrap);
        assert!(options.line_numbers);
        assert!(options.automatic_layout);
    }

    #[test]
    fn test_source_defaults_follow_starter_flag() {
        assert_eq!(AppSettings::default().source_defaults(), SourceDefaults::empty());
        let settings = AppSettings { starter_templates: true, ..Default::default() };
        assert_eq!(settings.source_defaults(), SourceDefaults::starter());
    }

    #[test]
    fn test_storage_file_override() {
        let settings = AppSettings {
            storage_path: Some(PathBuf::from("/tmp/pad/store.json")),
            ..Default::default()
        };
        assert_eq!(settings.storage_file(), PathBuf::from("/tmp/pad/store.json"));
        assert!(AppSettings::default().storage_file().ends_with("codepad/storage.json"));
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            font_size: 22,
            starter_templates: true,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ nope").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_zero_font_size_rejected() {
        let dir = tempdir().unwrap();
        let settings = AppSettings { font_size: 0, ..Default::default() };
        let err = settings.save_to(&dir.path().join("settings.json")).unwrap_err();
        assert!(matches!(err, AppError::Settings(_)));
    }
}
