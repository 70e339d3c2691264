//! # Context Initialization
//!
//! Promptbox keeps its data next to the program: `prompts.json` lives in the
//! directory that holds the `promptbox` executable (the *install directory*).
//! There is no flag or variable to move it.
//!
//! [`initialize`] wires everything a client needs from that one directory:
//!
//! 1. Load [`PromptboxConfig`] (env, install dir, user config dir, defaults). A broken
//!    config file is reported and ignored rather than blocking access to prompts.
//! 2. Build the [`FileStore`] over `<install_dir>/prompts.json`.
//! 3. Create the document if it does not exist yet (idempotent).
//! 4. Wrap the store in a [`PromptApi`] carrying the listing defaults.

use crate::api::{ListOptions, PromptApi};
use crate::config::PromptboxConfig;
use crate::error::{PromptError, Result};
use crate::store::fs::FileStore;
use crate::store::{DataStore, InitOutcome};
use std::path::{Path, PathBuf};

pub struct PromptboxContext {
    pub api: PromptApi<FileStore>,
    pub config: PromptboxConfig,
    pub install_dir: PathBuf,
}

/// Directory containing the running executable.
pub fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| PromptError::Store(format!("No install directory for {}", exe.display())))
}

pub fn initialize(install_dir: &Path) -> Result<PromptboxContext> {
    let config = PromptboxConfig::load(install_dir).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable configuration: {}", e);
        PromptboxConfig::default()
    });

    let mut store = FileStore::in_dir(install_dir);
    if store.initialize()? == InitOutcome::Created {
        tracing::info!(
            "Created prompt store at {}",
            store.document_path().display()
        );
    }

    let list_options = ListOptions {
        order: config.order,
        base: config.base_rgb(),
    };

    Ok(PromptboxContext {
        api: PromptApi::new(store, list_options),
        config,
        install_dir: install_dir.to_path_buf(),
    })
}
