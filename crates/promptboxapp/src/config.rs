//! # Configuration
//!
//! Promptbox configuration is managed by [`confique`], which handles layered loading
//! from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `PROMPTBOX_BASE_COLOR`, `PROMPTBOX_ORDER`.
//! 2. **Install Config**: `promptbox.toml` next to the executable.
//! 3. **User Config**: `promptbox.toml` in the OS-appropriate config directory
//!    (via the `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `base_color` | `#444444` | Color that listings are ordered around |
//! | `order` | `similarity` | `similarity` (closest to `base_color` first) or `stored` |
//!
//! The location of `prompts.json` is not a setting: it always sits next to the
//! executable.

use crate::color::Rgb;
use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE: &str = "promptbox.toml";

/// How listings are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Closest to the base color first.
    #[default]
    Similarity,
    /// Document order.
    Stored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrder(String);

impl fmt::Display for UnknownOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown order '{}' (expected 'similarity' or 'stored')",
            self.0
        )
    }
}

impl std::error::Error for UnknownOrder {}

// Same spellings as `FromStr`, case-insensitive.
impl<'de> Deserialize<'de> for ListOrder {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for ListOrder {
    type Err = UnknownOrder;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "similarity" => Ok(ListOrder::Similarity),
            "stored" => Ok(ListOrder::Stored),
            other => Err(UnknownOrder(other.to_string())),
        }
    }
}

/// Configuration for promptbox, stored in `promptbox.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PromptboxConfig {
    /// Color that listings are ordered around (#RRGGBB).
    #[config(default = "#444444", env = "PROMPTBOX_BASE_COLOR")]
    pub base_color: String,

    /// "similarity" or "stored".
    #[config(default = "similarity", env = "PROMPTBOX_ORDER", parse_env = ListOrder::from_str)]
    pub order: ListOrder,
}

impl Default for PromptboxConfig {
    fn default() -> Self {
        Self {
            base_color: "#444444".to_string(),
            order: ListOrder::Similarity,
        }
    }
}

impl PromptboxConfig {
    /// Loads env, then `<install_dir>/promptbox.toml`, then the user config file.
    /// Missing files are skipped.
    pub fn load(install_dir: &Path) -> Result<Self> {
        let mut builder = Self::builder()
            .env()
            .file(install_dir.join(CONFIG_FILE));
        if let Some(user_file) = user_config_file() {
            builder = builder.file(user_file);
        }
        Ok(builder.load()?)
    }

    /// The configured base color. An unparseable value falls back to the neutral gray.
    pub fn base_rgb(&self) -> Rgb {
        Rgb::from_hex(&self.base_color).unwrap_or_else(|_| {
            tracing::warn!(
                "Ignoring invalid base_color '{}', using {}",
                self.base_color,
                Rgb::NEUTRAL
            );
            Rgb::NEUTRAL
        })
    }
}

/// `promptbox.toml` in the OS config directory, if there is a home to put it in.
pub fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("com", "promptbox", "promptbox")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
