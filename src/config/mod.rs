//! Configuration management for Purrfect.
//!
//! Configuration is read from `~/.config/purrfect/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::{content, FetchErrorPolicy, Happiness, PageSettings, PageVariant};
use crate::fetcher::{DEFAULT_FACT_URL, DEFAULT_IMAGE_URL};

/// Longest timer period accepted, one day.
pub const MAX_INTERVAL_SECS: u64 = 86_400;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Behaviour of the page itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Which version of the page to show (default: live)
    pub variant: PageVariant,
    /// Happiness when the page opens, 0-100 (default: 50)
    pub initial_happiness: u8,
    /// Happiness gained per pet (default: 10)
    pub pet_step: u8,
    /// Happiness lost per decay tick (default: 5)
    pub decay_step: u8,
    /// Seconds between decay ticks (default: 10)
    pub decay_interval_secs: u64,
    /// Seconds between automatic gallery advances (default: 5)
    pub carousel_interval_secs: u64,
    /// Fetch a fact and an image as soon as the page opens (default: true)
    pub fetch_on_start: bool,
    /// "silent" keeps failures off screen, "status" shows them in the status bar
    pub fetch_errors: FetchErrorPolicy,
    pub fact_url: String,
    pub image_url: String,
    /// Shown in place of the remote image until one has been fetched
    pub placeholder_image: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            variant: PageVariant::Live,
            initial_happiness: 50,
            pet_step: 10,
            decay_step: 5,
            decay_interval_secs: 10,
            carousel_interval_secs: 5,
            fetch_on_start: true,
            fetch_errors: FetchErrorPolicy::Silent,
            fact_url: DEFAULT_FACT_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            placeholder_image: content::hero_image().url.to_string(),
        }
    }
}

impl PageConfig {
    pub fn settings(&self) -> PageSettings {
        PageSettings {
            pet_step: self.pet_step,
            decay_step: self.decay_step,
            fetch_errors: self.fetch_errors,
            placeholder_image: self.placeholder_image.clone(),
        }
    }

    pub fn initial_happiness(&self) -> Happiness {
        Happiness::new(self.initial_happiness)
    }

    pub fn decay_interval(&self) -> Duration {
        Duration::from_secs(self.decay_interval_secs)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, writing the commented default first
    /// if nothing is there yet. Missing fields use default values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default config file path: `~/.config/purrfect/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("purrfect").join("config.toml"))
    }

    /// Reject values the page cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let page = &self.page;
        for (key, secs) in [
            ("page.decay_interval_secs", page.decay_interval_secs),
            ("page.carousel_interval_secs", page.carousel_interval_secs),
        ] {
            if !(1..=MAX_INTERVAL_SECS).contains(&secs) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 1 and {}",
                    key, MAX_INTERVAL_SECS
                )));
            }
        }
        if page.initial_happiness > Happiness::MAX {
            return Err(ConfigError::Invalid(format!(
                "page.initial_happiness must be between 0 and {}",
                Happiness::MAX
            )));
        }
        for (key, value) in [("page.fact_url", &page.fact_url), ("page.image_url", &page.image_url)]
        {
            url::Url::parse(value)
                .map_err(|e| ConfigError::Invalid(format!("{} is not a valid URL: {}", key, e)))?;
        }
        if let Some(bad) = self.keybindings.invalid_bindings().into_iter().next() {
            return Err(ConfigError::Invalid(format!("keybindings: {}", bad)));
        }
        Ok(())
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

const DEFAULT_CONFIG: &str = r##"# Purrfect Cat World configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[page]
# classic: one picture and a like button
# gallery: rotating pictures and a happiness meter
# live:    random facts and pictures from the web
variant = "live"

initial_happiness = 50
pet_step = 10
decay_step = 5
decay_interval_secs = 10
carousel_interval_secs = 5

# Fetch a fact and a picture when the page opens
fetch_on_start = true

# What a failed fetch does: "silent" or "status"
fetch_errors = "silent"

fact_url = "https://catfact.ninja/fact"
image_url = "https://api.thecatapi.com/v1/images/search"
placeholder_image = "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg"

[colors]
title = "Magenta"
border = "LightMagenta"
heart = "Red"
gauge = "LightMagenta"
tab_active = "Magenta"
breed_name = "Magenta"
link = "Blue"
fact = "White"
status_fg = "White"
status_bg = "DarkGray"
error = "LightRed"

[keybindings]
quit = ["q", "Ctrl+c", "Esc"]
pet = ["l", "Space"]
request_fact = ["f"]
request_image = ["i"]
next_tab = ["Tab"]
prev_tab = ["BackTab", "Shift+Tab"]
carousel_next = ["Right", "n"]
carousel_prev = ["Left", "p"]
open_image = ["o"]
"##;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
