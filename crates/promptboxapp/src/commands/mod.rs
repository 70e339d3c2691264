//! # Command Layer
//!
//! This module contains the **core business logic** of promptbox. Each command lives in
//! its own submodule and implements a plain function over a [`DataStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Call the store and the ordering engine
//! - Turn store outcomes (created, renamed, not found, unreadable...) into leveled
//!   [`CmdMessage`]s
//! - Return a structured [`CmdResult`]
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, stderr, clipboard or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **User interaction**: No confirmations (return data, UI decides)
//!
//! Recoverable conditions (unreadable store, deleting a missing prompt) come back as
//! warning messages on an `Ok` result. Errors are reserved for validation failures,
//! lookups of a prompt that must exist, and I/O.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and check the `CmdResult` contents.
//!
//! ## Command Modules
//!
//! - [`init`]: Create the prompt document
//! - [`list`]: List prompts, ordered by color similarity
//! - [`view`]: Fetch one prompt
//! - [`save`]: Create, update or rename a prompt
//! - [`delete`]: Remove a prompt
//! - [`compose`]: Combine a prompt with free text
//! - [`paths`]: Where the document lives
//! - [`helpers`]: Shared lookups

use crate::color::{contrast_text_color, TextColor};
use crate::model::Prompt;
use serde::Serialize;
use std::path::PathBuf;

pub mod compose;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod paths;
pub mod save;
pub mod view;

/// Severity of a [`CmdMessage`].
///
/// Commands emit `Info`, `Success` and `Warning`; their failures travel as `Err`.
/// `Error` is for UI clients that turn such an `Err` into a message of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A prompt paired with the text color that stays legible on its swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPrompt {
    pub prompt: Prompt,
    pub text_color: TextColor,
}

impl DisplayPrompt {
    pub fn new(prompt: Prompt) -> Self {
        let text_color = contrast_text_color(prompt.rgb());
        Self { prompt, text_color }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_prompts: Vec<DisplayPrompt>,
    pub listed_prompts: Vec<DisplayPrompt>,
    pub messages: Vec<CmdMessage>,
    /// Text produced by `compose`, ready to paste.
    pub composed: Option<String>,
    pub paths: Vec<PathBuf>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_prompts(mut self, prompts: Vec<DisplayPrompt>) -> Self {
        self.affected_prompts = prompts;
        self
    }

    pub fn with_listed_prompts(mut self, prompts: Vec<DisplayPrompt>) -> Self {
        self.listed_prompts = prompts;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
