use super::backend::StorageBackend;
use crate::error::{PromptError, Result};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<Vec<u8>>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose document already holds `contents`.
    pub fn with_document(contents: impl Into<String>) -> Self {
        let backend = Self::new();
        Self::with_bytes(contents.into().into_bytes())
    }

    /// Backend whose document holds arbitrary bytes, valid UTF-8 or not.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        *backend.document.borrow_mut() = Some(bytes.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Current raw document, exactly as last written.
    pub fn raw_document(&self) -> Option<String> {
        self.document
            .borrow()
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read_document(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.document.borrow().clone())
    }

    fn write_document(&self, contents: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PromptError::Store("Simulated write error".to_string()));
        }
        *self.document.borrow_mut() = Some(contents.as_bytes().to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn document_exists(&self) -> bool {
        self.document.borrow().is_some()
    }

    fn document_path(&self) -> PathBuf {
        PathBuf::from("memory://prompts.json")
    }
}
