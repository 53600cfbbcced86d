//! Application configuration.
//!
//! Desktop builds read `config.json` from the platform config directory
//! (e.g. `~/.config/affectmap/config.json`); web builds always use the
//! defaults. Every section is optional, so a file containing only
//! `{"default_title": "Oldboy"}` is valid.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::fonts::FontConfig;
use crate::chart::ChartStyle;
use crate::core::selection::{Intensity, SelectionOrder};

/// Current configuration file format version.
pub const CONFIG_VERSION: u32 = 1;

/// Overrides `access_phrase` when set.
pub const ACCESS_PHRASE_ENV: &str = "AFFECTMAP_ACCESS_PHRASE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported configuration version {0} (expected {})", CONFIG_VERSION)]
    Version(u32),
}

/// Log level setting for the launchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Work title prefilled in the form.
    pub default_title: String,
    pub chart: ChartStyle,
    pub fonts: FontConfig,
    pub selection_order: SelectionOrder,
    /// Intensity a descriptor gets when its checkbox is ticked.
    pub default_intensity: Intensity,
    /// Where desktop exports are written; defaults to the data directory.
    pub export_dir: Option<PathBuf>,
    /// Plaintext phrase shown as a gate in front of the map form.
    ///
    /// This is a courtesy screen, not access control: the phrase is stored
    /// and compared in plain text with no rate limiting.
    pub access_phrase: Option<String>,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            default_title: "기생충".to_string(),
            chart: ChartStyle::default(),
            fonts: FontConfig::default(),
            selection_order: SelectionOrder::default(),
            default_intensity: Intensity::default(),
            export_dir: None,
            access_phrase: None,
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::Version(config.version));
        }
        Ok(config.normalized())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load the user's configuration, falling back to defaults when the file
    /// is missing or invalid.
    pub fn load() -> Self {
        let mut config = match config_path() {
            Some(path) if path.exists() => match Self::load_from(&path) {
                Ok(config) => {
                    log::info!("[config] loaded {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("[config] {err}; using defaults");
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        if let Some(phrase) = env_access_phrase() {
            config.access_phrase = Some(phrase);
        }
        config.normalized()
    }

    fn normalized(mut self) -> Self {
        self.chart = self.chart.sanitized();
        self.access_phrase = self
            .access_phrase
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "Affectmap", "affectmap")
        .map(|dirs| dirs.config_dir().join("config.json"))
}

#[cfg(target_arch = "wasm32")]
pub fn config_path() -> Option<PathBuf> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn env_access_phrase() -> Option<String> {
    std::env::var(ACCESS_PHRASE_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_access_phrase() -> Option<String> {
    option_env!("AFFECTMAP_ACCESS_PHRASE").map(str::to_string)
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Install `config` as the process configuration. Returns `false` if one was
/// already installed (the first one wins).
pub fn install(config: AppConfig) -> bool {
    CONFIG.set(config).is_ok()
}

/// The active configuration, loaded on first use if none was installed.
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}
