use crate::locale::Locale;
use crate::video::DEFAULT_ALLOWED_HOSTS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub ui: UiConfig,
    pub window: WindowConfig,
    pub font: FontConfig,
    pub video: VideoConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Language of labels: "pt" or "en"
    pub locale: Locale,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Font and text rendering configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    /// Size of description text (in points)
    pub body_size: f32,
    /// Size of code listings (in points)
    pub code_size: f32,
}

/// Video link trust settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VideoConfig {
    /// Hosts whose https links may be opened in the browser
    pub allowed_hosts: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig::default(),
            ui: UiConfig::default(),
            window: WindowConfig::default(),
            font: FontConfig::default(),
            video: VideoConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Portuguese,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            body_size: 14.0,
            code_size: 12.0,
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: DEFAULT_ALLOWED_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "arbor")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, falling back to defaults.
    ///
    /// Also returns the path later changes may be written to. See
    /// [`Config::load_or_default`].
    pub fn load() -> (Self, Option<PathBuf>) {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => (Config::default(), None),
        }
    }

    /// Load `path`, falling back to defaults when it is absent or unreadable.
    ///
    /// The returned path is `None` when the file exists but could not be
    /// loaded: writing defaults over it would lose the user's settings.
    pub fn load_or_default(path: &Path) -> (Self, Option<PathBuf>) {
        if !path.exists() {
            return (Config::default(), Some(path.to_path_buf()));
        }
        match Self::load_from(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded configuration");
                (config, Some(path.to_path_buf()))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default configuration, changes will not be saved");
                (Config::default(), None)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
