use super::backend::StorageBackend;
use crate::error::{PromptError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File name of the prompt document inside the install directory.
pub const DOCUMENT_FILE: &str = "prompts.json";

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Backend for `<dir>/prompts.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DOCUMENT_FILE))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(PromptError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_document(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PromptError::Io(e)),
        }
    }

    fn write_document(&self, contents: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self.ensure_dir(&dir)?;

        // Atomic write
        let tmp_path = dir.join(format!(".prompts-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PromptError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PromptError::Io(e));
        }

        tracing::debug!("Wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }

    fn document_exists(&self) -> bool {
        self.path.exists()
    }

    fn document_path(&self) -> PathBuf {
        self.path.clone()
    }
}
