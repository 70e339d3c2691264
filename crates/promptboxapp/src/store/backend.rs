use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while PromptStore handles the "what" (validation, upsert, fail-soft loading).
pub trait StorageBackend {
    /// Read the raw document bytes. Decoding is the store's job, so a document that is
    /// not UTF-8 still comes back as `Ok`.
    /// Returns Ok(None) if it does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_document(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the whole document.
    /// MUST be atomic (e.g. write to tmp then rename) so readers never see a partial write.
    fn write_document(&self, contents: &str) -> Result<()>;

    fn document_exists(&self) -> bool;

    /// Where the document lives. For MemBackend, a virtual path.
    fn document_path(&self) -> PathBuf;
}
