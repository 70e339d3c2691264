//! # Domain Model: Prompts at Rest and in Memory
//!
//! A prompt lives in two shapes:
//!
//! - [`PromptRecord`]: exactly what sits in `prompts.json`. The `color` field is
//!   optional because older documents (and hand-written ones) omit it, and it is kept
//!   as raw JSON so an odd value (`123`, `"red"`) neither breaks parsing nor changes
//!   on rewrite. Keys this crate does not know about are kept in `extra`.
//! - [`Prompt`]: the normalized view handed to callers. `color` is always present.
//!
//! The only bridge between the two is [`Prompt::from_record`], the default-filling
//! step run by the store on every load:
//!
//! | Stored `color`        | `Prompt::color`       |
//! |-----------------------|-----------------------|
//! | absent                | `#444444`             |
//! | well-formed `#RRGGBB` | kept exactly as given |
//! | malformed or not text | `#444444` (warned)    |
//!
//! Backfilling is read-only: the record on disk keeps its shape until the prompt
//! itself is saved again.
//!
//! ## Document Shape
//!
//! ```text
//! { "prompts": [ { "name": "...", "content": "...", "color": "#RRGGBB" }, ... ] }
//! ```
//!
//! A document without a `prompts` key reads as an empty collection. Entries without a
//! string `name` and `content` are kept as [`StoredEntry::Other`]: they are not listed,
//! and they are written back exactly as found.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::color::Rgb;
use crate::error::{Result, ValidationError};

/// Color used whenever a prompt has none (or an unusable one).
pub const DEFAULT_COLOR: &str = "#444444";

/// A prompt as stored in the JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PromptRecord {
    pub fn new(name: String, content: String, color: String) -> Self {
        Self {
            name,
            content,
            color: Some(Value::String(color)),
            extra: Map::new(),
        }
    }
}

/// One element of the `prompts` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Prompt(PromptRecord),
    /// Anything that does not have the prompt shape, carried through untouched.
    Other(Value),
}

impl StoredEntry {
    pub fn as_record(&self) -> Option<&PromptRecord> {
        match self {
            StoredEntry::Prompt(record) => Some(record),
            StoredEntry::Other(_) => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut PromptRecord> {
        match self {
            StoredEntry::Prompt(record) => Some(record),
            StoredEntry::Other(_) => None,
        }
    }

    /// The `name` of an unparsed entry, when it has a string one.
    fn other_name(&self) -> Option<&str> {
        match self {
            StoredEntry::Other(value) => value.get("name").and_then(Value::as_str),
            StoredEntry::Prompt(_) => None,
        }
    }
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptDocument {
    #[serde(default)]
    pub prompts: Vec<StoredEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PromptDocument {
    /// Index of the first prompt record with exactly this name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.prompts
            .iter()
            .position(|entry| entry.as_record().is_some_and(|r| r.name == name))
    }

    /// Index of the first unparsed entry named `name`.
    pub fn other_position(&self, name: &str) -> Option<usize> {
        self.prompts
            .iter()
            .position(|entry| entry.other_name() == Some(name))
    }

    pub fn records(&self) -> impl Iterator<Item = &PromptRecord> {
        self.prompts.iter().filter_map(StoredEntry::as_record)
    }

    /// Number of entries that are not prompts.
    pub fn other_count(&self) -> usize {
        self.prompts.len() - self.records().count()
    }
}

/// A prompt with its color resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub name: String,
    pub content: String,
    pub color: String,
}

impl Prompt {
    pub fn new(name: impl Into<String>, content: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            color: color.into(),
        }
    }

    pub fn from_record(record: &PromptRecord) -> Self {
        let color = match &record.color {
            None => DEFAULT_COLOR.to_string(),
            Some(Value::String(color)) if Rgb::from_hex(color).is_ok() => color.clone(),
            Some(color) => {
                tracing::warn!(
                    "Prompt '{}' has an unusable color {}, showing {} instead",
                    record.name,
                    color,
                    DEFAULT_COLOR
                );
                DEFAULT_COLOR.to_string()
            }
        };

        Self {
            name: record.name.clone(),
            content: record.content.clone(),
            color,
        }
    }

    /// Decoded color. Falls back to the default for values that do not parse,
    /// which can only happen for prompts built by hand.
    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(&self.color).unwrap_or(Rgb::NEUTRAL)
    }
}

/// Arguments of a save: what to store, and which existing prompt (if any) it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInput {
    pub name: String,
    pub content: String,
    pub color: Option<String>,
    pub original_name: Option<String>,
}

impl PromptInput {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            color: None,
            original_name: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Marks this save as an edit of the prompt currently named `original_name`.
    pub fn renaming(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = Some(original_name.into());
        self
    }

    /// The name used to find the entry to update.
    pub fn resolution_key(&self) -> &str {
        self.original_name.as_deref().unwrap_or(&self.name)
    }

    pub fn effective_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    /// Checks everything that can be checked without reading the store.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent.into());
        }
        Rgb::from_hex(self.effective_color())?;
        Ok(())
    }
}

/// Joins a prompt with free text the way it is pasted elsewhere:
/// `content "text"`, or the bare content when there is no text.
pub fn compose_text(content: &str, user_text: &str) -> String {
    let user_text = user_text.trim();
    if user_text.is_empty() {
        content.to_string()
    } else {
        format!("{} \"{}\"", content, user_text)
    }
}
