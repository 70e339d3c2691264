use super::fs_backend::FsBackend;
use super::prompt_store::PromptStore;
use std::path::{Path, PathBuf};

pub type FileStore = PromptStore<FsBackend>;

impl FileStore {
    /// Store backed by the document at `path`.
    pub fn new(path: PathBuf) -> Self {
        PromptStore::with_backend(FsBackend::new(path))
    }

    /// Store backed by `prompts.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        PromptStore::with_backend(FsBackend::in_dir(dir))
    }
}
