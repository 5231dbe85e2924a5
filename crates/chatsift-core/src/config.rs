//! Configuration types for chatsift.
//!
//! [`Config::load`] reads `~/.config/chatsift/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::normalizer::{FormatList, FormatListError, DEFAULT_FORMATS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[parser]
# Ordered chrono formats tried against each boundary timestamp; first match wins.
formats = [
    "%m/%d/%y, %I:%M %p",
    "%m/%d/%y, %H:%M",
    "%d/%m/%y, %H:%M",
    "%d/%m/%y, %I:%M %p",
]

[stats]
media_markers    = ["media omitted"]
excluded_markers = ["omitted", "deleted"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/chatsift/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

/// `[parser]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_formats() -> Vec<String> {
    DEFAULT_FORMATS.iter().map(ToString::to_string).collect()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            formats: default_formats(),
        }
    }
}

/// `[stats]` section of `config.toml`. Lowercase substrings matched
/// case-insensitively against message bodies.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Placeholder substrings the exporter substitutes for attached media.
    #[serde(default = "default_media_markers")]
    pub media_markers: Vec<String>,
    /// Substrings excluding a message from word-frequency counting.
    #[serde(default = "default_excluded_markers")]
    pub excluded_markers: Vec<String>,
}

fn default_media_markers() -> Vec<String> {
    vec!["media omitted".to_string()]
}

fn default_excluded_markers() -> Vec<String> {
    vec!["omitted".to_string(), "deleted".to_string()]
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            media_markers: default_media_markers(),
            excluded_markers: default_excluded_markers(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/chatsift/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The validated, ordered datetime format list from `[parser] formats`.
    pub fn format_list(&self) -> Result<FormatList, FormatListError> {
        FormatList::new(self.parser.formats.clone())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("chatsift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
