//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for all promptbox operations, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Holds the listing defaults** (order and base color) resolved from configuration
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic (that lives in `commands/*.rs`) and no presentation:
//! no stdout, no clipboard, no formatting.
//!
//! ## Generic Over DataStore
//!
//! `PromptApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PromptApi<FileStore>`
//! - Testing: `PromptApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::PromptInput;
use crate::store::DataStore;

pub use crate::commands::list::ListOptions;
pub use crate::commands::{CmdMessage, CmdResult, DisplayPrompt, MessageLevel};
pub use crate::config::ListOrder;

/// The main API facade for promptbox operations.
///
/// All UI clients should interact through this API. The store inside is the only
/// handle on the prompt document; hold one `PromptApi` per process.
pub struct PromptApi<S: DataStore> {
    store: S,
    list_options: ListOptions,
}

impl<S: DataStore> PromptApi<S> {
    pub fn new(store: S, list_options: ListOptions) -> Self {
        Self {
            store,
            list_options,
        }
    }

    /// Listing defaults this API was built with.
    pub fn list_options(&self) -> ListOptions {
        self.list_options
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn list_prompts(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, self.list_options)
    }

    pub fn list_prompts_with(&self, options: ListOptions) -> Result<CmdResult> {
        commands::list::run(&self.store, options)
    }

    pub fn view_prompt(&self, name: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, name)
    }

    pub fn save_prompt(&mut self, input: PromptInput) -> Result<CmdResult> {
        commands::save::run(&mut self.store, input)
    }

    pub fn delete_prompt(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn compose(&self, name: &str, user_text: &str) -> Result<CmdResult> {
        commands::compose::run(&self.store, name, user_text)
    }

    pub fn paths(&self) -> Result<CmdResult> {
        commands::paths::run(&self.store)
    }
}
