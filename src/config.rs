//! Configuration loading for DrillPad
//!
//! TOML-based configuration with built-in defaults. Resolution order:
//!
//! 1. Path given on the command line (`--config`)
//! 2. `DRILLPAD_CONFIG` environment variable
//! 3. `$XDG_CONFIG_HOME/drillpad/config.toml` (via `dirs`)
//! 4. `~/.drillpad/config.toml`
//! 5. `./drillpad.toml`
//! 6. Built-in defaults
//!
//! A config file that fails to load or validate logs a warning and falls
//! back to defaults; startup never aborts over configuration.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Main configuration structure for DrillPad
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exercise platform server settings
    pub server: ServerConfig,

    /// Editor pane settings
    pub editor: EditorConfig,

    /// Window and theme settings
    pub ui: UiConfig,
}

/// Where the exercise platform lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL all endpoint paths are joined onto
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

/// Editor pane settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Language label shown next to the editor
    pub language: String,

    /// Tab width in spaces
    pub tab_width: u8,

    /// Text shown before any template has been loaded
    pub placeholder: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            language: "java".to_string(),
            tab_width: 4,
            placeholder: "// Select a problem to load the code template".to_string(),
        }
    }
}

/// Window and theme settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// "dark" or "light"
    pub theme: String,

    /// Initial window dimensions
    pub window_width: f32,
    pub window_height: f32,

    /// Font size for editor and output text
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            window_width: 1200.0,
            window_height: 800.0,
            font_size: 14.0,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the lookup chain,
    /// falling back to defaults on any failure.
    pub fn load(explicit: Option<&Path>) -> Self {
        let candidate = explicit
            .map(PathBuf::from)
            .or_else(|| env::var("DRILLPAD_CONFIG").ok().map(PathBuf::from))
            .or_else(default_config_path);

        let Some(path) = candidate else {
            debug!("No config file found, using defaults");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(config) => {
                debug!("Configuration loaded from: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config from {}: {}", path.display(), e);
                warn!("Falling back to default configuration");
                Self::default()
            }
        }
    }

    /// Load and validate a configuration file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate().map_err(|e| Error::ConfigValidationFailed {
            field: e.field().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.server.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !self.server.base_url.starts_with("http://")
            && !self.server.base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidBaseUrl(self.server.base_url.clone()));
        }
        if self.editor.tab_width == 0 || self.editor.tab_width > 16 {
            return Err(ConfigError::InvalidTabWidth(self.editor.tab_width));
        }
        if self.ui.font_size < 6.0 || self.ui.font_size > 72.0 {
            return Err(ConfigError::InvalidFontSize(self.ui.font_size));
        }
        Ok(())
    }
}

/// Validation failures for configuration values
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("server.base_url must not be empty")]
    EmptyBaseUrl,

    #[error("server.base_url '{0}' is not an http(s) URL")]
    InvalidBaseUrl(String),

    #[error("editor.tab_width {0} is outside 1..=16")]
    InvalidTabWidth(u8),

    #[error("ui.font_size {0} is outside 6..=72")]
    InvalidFontSize(f32),
}

impl ConfigError {
    /// The configuration field this error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::EmptyBaseUrl | ConfigError::InvalidBaseUrl(_) => "server.base_url",
            ConfigError::InvalidTabWidth(_) => "editor.tab_width",
            ConfigError::InvalidFontSize(_) => "ui.font_size",
        }
    }
}

/// First existing path in the standard lookup chain
fn default_config_path() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("drillpad").join("config.toml"));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".drillpad").join("config.toml"));
    }
    candidates.push(PathBuf::from("drillpad.toml"));

    candidates.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.editor.language, "java");
        assert_eq!(config.editor.tab_width, 4);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "[server]\nbase_url = \"https://exercises.example.edu\"\n\n[ui]\ntheme = \"light\"\n"
        )
        .expect("write config");

        let config = Config::load_from_file(file.path()).expect("loads");
        assert_eq!(config.server.base_url, "https://exercises.example.edu");
        assert_eq!(config.ui.theme, "light");
        // Unspecified sections keep their defaults
        assert_eq!(config.editor.tab_width, 4);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::load_from_file(Path::new("/nonexistent/drillpad.toml"));
        assert!(matches!(result, Err(Error::ConfigLoadFailed { .. })));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not [valid toml").expect("write config");
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let mut config = Config::default();
        config.server.base_url = "ftp://wrong".to_string();
        let err = config.validate().expect_err("ftp is not http(s)");
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
        assert_eq!(err.field(), "server.base_url");
    }

    #[test]
    fn test_validation_rejects_zero_tab_width() {
        let mut config = Config::default();
        config.editor.tab_width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTabWidth(0))
        ));
    }

    #[test]
    fn test_invalid_values_fail_file_load() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[editor]\ntab_width = 99\n").expect("write config");
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(Error::ConfigValidationFailed { .. })
        ));
    }

    #[test]
    fn test_load_falls_back_to_defaults_on_bad_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[server]\nbase_url = \"\"\n").expect("write config");

        let config = Config::load(Some(file.path()));
        assert_eq!(config.server.base_url, ServerConfig::default().base_url);
    }
}
