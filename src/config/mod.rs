//! Configuration models for .termfx/config.json.
//!
//! Every field has a serde default, so a partial or missing file yields
//! the same rendering as the library defaults. CLI flags override these
//! values.

pub mod field;
pub mod metadata;
mod validation;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use field::{ConfigField, FieldError};

use crate::color::Color;
use crate::loader::{LoaderKind, LoaderOptions};
use crate::progress::{ProgressStyle, DEFAULT_WIDTH};

/// Default config file path.
pub const CONFIG_FILE: &str = ".termfx/config.json";

/// Settings for `colorize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorizeConfig {
    /// Color used when none is given.
    #[serde(default)]
    pub default_color: Color,
}

impl Default for ColorizeConfig {
    fn default() -> Self {
        Self {
            default_color: Color::White,
        }
    }
}

/// Settings for the progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Bar width in characters.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Character for the completed part.
    #[serde(default = "default_bar_char")]
    pub fill_char: char,
    /// Character for the remaining part.
    #[serde(default = "default_bar_char")]
    pub empty_char: char,
    /// Color of the completed part.
    #[serde(default = "default_fill_color")]
    pub color: Color,
    /// Delay between steps of the `progress` demo.
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_bar_char() -> char {
    '='
}

fn default_fill_color() -> Color {
    Color::Green
}

fn default_step_ms() -> u64 {
    100
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            fill_char: default_bar_char(),
            empty_char: default_bar_char(),
            color: default_fill_color(),
            step_ms: default_step_ms(),
        }
    }
}

impl ProgressConfig {
    /// The bar style described by this config.
    pub fn style(&self) -> ProgressStyle {
        ProgressStyle {
            fill_char: self.fill_char,
            empty_char: self.empty_char,
            fill_color: self.color,
        }
    }
}

/// Settings for loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Animation kind.
    #[serde(default)]
    pub kind: LoaderKind,
    /// Text shown after the frame.
    #[serde(default = "default_message")]
    pub message: String,
    /// Milliseconds between frames.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Draw the first frame immediately instead of after one interval.
    #[serde(default)]
    pub immediate_first_frame: bool,
    /// How long the `loader` demo runs before stopping.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_message() -> String {
    "Loading".to_string()
}

fn default_interval_ms() -> u64 {
    300
}

fn default_duration_ms() -> u64 {
    5000
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            kind: LoaderKind::Dots,
            message: default_message(),
            interval_ms: default_interval_ms(),
            immediate_first_frame: false,
            duration_ms: default_duration_ms(),
        }
    }
}

impl LoaderConfig {
    /// Loader scheduling options described by this config.
    pub fn options(&self) -> LoaderOptions {
        LoaderOptions {
            interval: Duration::from_millis(self.interval_ms),
            immediate_first_frame: self.immediate_first_frame,
        }
    }
}

/// Main termfx configuration model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermfxConfig {
    /// `colorize` settings.
    #[serde(default)]
    pub colorize: ColorizeConfig,
    /// Progress bar settings.
    #[serde(default)]
    pub progress: ProgressConfig,
    /// Loader settings.
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Error type for config operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading or writing the config file.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Error parsing the config file JSON.
    #[error("Failed to parse config JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl TermfxConfig {
    /// Load configuration from a file, or return defaults if it doesn't exist.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to config file. Defaults to `.termfx/config.json` if None.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config: TermfxConfig = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save configuration to a file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<(), ConfigError> {
        let path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Get a config value by dot-notation path.
    pub fn get_by_path(&self, path: &str) -> Result<String, FieldError> {
        let (section, key) = field::split_path(path)?;
        let value = match section {
            "colorize" => self.colorize.get_field(key),
            "progress" => self.progress.get_field(key),
            "loader" => self.loader.get_field(key),
            _ => None,
        };
        value.ok_or_else(|| FieldError::UnknownKey(path.into()))
    }

    /// Set a config value by dot-notation path.
    pub fn set_by_path(&mut self, path: &str, value: &str) -> Result<(), FieldError> {
        let (section, key) = field::split_path(path)?;
        match section {
            "colorize" => self.colorize.set_field(key, value),
            "progress" => self.progress.set_field(key, value),
            "loader" => self.loader.set_field(key, value),
            _ => Err(FieldError::UnknownKey(path.into())),
        }
    }

    /// List all section names.
    pub fn section_names() -> &'static [&'static str] {
        &["colorize", "progress", "loader"]
    }

    /// Get all field names for a section.
    pub fn fields_for_section(section: &str) -> Option<&'static [&'static str]> {
        match section {
            "colorize" => Some(ColorizeConfig::field_names()),
            "progress" => Some(ProgressConfig::field_names()),
            "loader" => Some(LoaderConfig::field_names()),
            _ => None,
        }
    }

    /// List all valid config keys as dot-notation paths.
    pub fn all_keys() -> Vec<String> {
        Self::section_names()
            .iter()
            .filter_map(|section| {
                Self::fields_for_section(section)
                    .map(|fields| fields.iter().map(move |f| format!("{section}.{f}")))
            })
            .flatten()
            .collect()
    }

    /// Reset a whole section to defaults.
    pub fn reset_section(&mut self, section: &str) -> Result<(), FieldError> {
        match section {
            "colorize" => self.colorize = ColorizeConfig::default(),
            "progress" => self.progress = ProgressConfig::default(),
            "loader" => self.loader = LoaderConfig::default(),
            _ => return Err(FieldError::UnknownKey(section.into())),
        }
        Ok(())
    }

    /// Reset a single field to its default.
    pub fn reset_field(&mut self, path: &str) -> Result<(), FieldError> {
        let default_value = Self::default().get_by_path(path)?;
        self.set_by_path(path, &default_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_library_defaults() {
        let config = TermfxConfig::default();
        assert_eq!(config.colorize.default_color, Color::default());
        assert_eq!(config.progress.style(), ProgressStyle::default());
        assert_eq!(config.progress.width, DEFAULT_WIDTH);
        assert_eq!(config.loader.options(), LoaderOptions::default());
        assert_eq!(config.loader.kind, LoaderKind::Dots);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");
        let config = TermfxConfig::load(Some(&path)).unwrap();
        assert_eq!(config, TermfxConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.json");

        let mut config = TermfxConfig::default();
        config.colorize.default_color = Color::Purple;
        config.progress.width = 40;
        config.loader.kind = LoaderKind::Bar;
        config.loader.message = "Fetching".to_string();
        config.save(Some(&path)).unwrap();

        let loaded = TermfxConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"loader": {"kind": "spin"}}"#).unwrap();

        let config = TermfxConfig::load(Some(&path)).unwrap();
        assert_eq!(config.loader.kind, LoaderKind::Spin);
        assert_eq!(config.loader.interval_ms, 300);
        assert_eq!(config.progress, ProgressConfig::default());
    }

    #[test]
    fn test_unknown_color_in_json_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"colorize": {"default_color": "pink"}}"#).unwrap();

        let result = TermfxConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_get_and_set_by_path() {
        let mut config = TermfxConfig::default();
        assert_eq!(config.get_by_path("progress.width").unwrap(), "20");

        config.set_by_path("progress.width", "32").unwrap();
        config.set_by_path("loader.kind", "bar").unwrap();
        assert_eq!(config.progress.width, 32);
        assert_eq!(config.loader.kind, LoaderKind::Bar);
    }

    #[test]
    fn test_get_unknown_section() {
        let config = TermfxConfig::default();
        assert!(matches!(
            config.get_by_path("theme.accent"),
            Err(FieldError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_all_keys_are_gettable() {
        let config = TermfxConfig::default();
        let keys = TermfxConfig::all_keys();
        assert!(keys.contains(&"loader.interval_ms".to_string()));
        for key in keys {
            assert!(config.get_by_path(&key).is_ok(), "{key} not gettable");
        }
    }

    #[test]
    fn test_reset_section_and_field() {
        let mut config = TermfxConfig::default();
        config.set_by_path("progress.width", "50").unwrap();
        config.set_by_path("progress.fill_char", "#").unwrap();
        config.set_by_path("loader.message", "Busy").unwrap();

        config.reset_field("progress.width").unwrap();
        assert_eq!(config.progress.width, 20);
        assert_eq!(config.progress.fill_char, '#');

        config.reset_section("progress").unwrap();
        assert_eq!(config.progress, ProgressConfig::default());
        assert_eq!(config.loader.message, "Busy");

        assert!(config.reset_section("nope").is_err());
    }

    #[test]
    fn test_every_section_lists_its_fields() {
        assert_eq!(TermfxConfig::section_names(), ["colorize", "progress", "loader"]);
        for section in TermfxConfig::section_names() {
            let fields = TermfxConfig::fields_for_section(section).unwrap();
            assert!(!fields.is_empty(), "{section} has no fields");
        }
        assert!(TermfxConfig::fields_for_section("theme").is_none());
        assert_eq!(TermfxConfig::fields_for_section("colorize"), Some(&["default_color"][..]));
    }
}
