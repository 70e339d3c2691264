//! # Storage Layer
//!
//! This module defines the storage abstraction for promptbox. The [`DataStore`] trait
//! is what the command layer talks to; [`prompt_store::PromptStore`] implements it on
//! top of any [`backend::StorageBackend`].
//!
//! ## One Document, Rewritten Whole
//!
//! All prompts live in a single JSON document (`prompts.json`). There is no cache and
//! no dirty state: every operation re-reads the document, works on the fresh copy and,
//! if it changed anything, rewrites the document in full. Each call is therefore
//! consistent on its own, and nothing is remembered between calls.
//!
//! ## Single Writer
//!
//! There is no locking, in process or on disk. Two writers that overlap will race and
//! the last full rewrite wins, silently discarding the other. Promptbox assumes exactly
//! one active writer. The atomic rename done by [`fs_backend::FsBackend`] only
//! guarantees that readers never see a half-written file.
//!
//! ## Fail-Soft Reads
//!
//! A missing or malformed document is not an error: [`DataStore::load`] reports it as
//! [`LoadOutcome::Missing`] or [`LoadOutcome::Unreadable`], both of which read as an
//! empty collection. A save on top of an unreadable document replaces it. Real I/O
//! failures (permissions, disk) still propagate as errors.
//!
//! ## Identity
//!
//! `name` is the primary key. A save resolves its target by `original_name` when
//! given (that is how a rename works: the entry keeps its position, only its fields
//! change), otherwise by `name`; unmatched saves append. A save never leaves two
//! entries with the same name behind.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store over `FsBackend`.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::{Prompt, PromptInput};
use std::path::PathBuf;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod prompt_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyPresent,
}

/// What a load found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Prompt>),
    Missing,
    Unreadable { reason: String },
}

impl LoadOutcome {
    /// The prompts, or an empty slice when the document could not be used.
    pub fn prompts(&self) -> &[Prompt] {
        match self {
            LoadOutcome::Loaded(prompts) => prompts,
            _ => &[],
        }
    }

    pub fn into_prompts(self) -> Vec<Prompt> {
        match self {
            LoadOutcome::Loaded(prompts) => prompts,
            _ => Vec::new(),
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, LoadOutcome::Unreadable { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
    Renamed { from: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Prompt),
    NotFound,
}

/// Abstract interface for prompt storage.
pub trait DataStore {
    /// Create an empty document if none exists. Safe to call on every startup.
    fn initialize(&mut self) -> Result<InitOutcome>;

    /// Read all prompts, colors backfilled.
    fn load(&self) -> Result<LoadOutcome>;

    /// Create or update a prompt (rename-aware).
    fn save(&mut self, input: &PromptInput) -> Result<SaveOutcome>;

    /// Remove the prompt with this exact name.
    fn delete(&mut self, name: &str) -> Result<DeleteOutcome>;

    fn document_path(&self) -> PathBuf;
}
