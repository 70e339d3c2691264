use crate::store::fs::FileStore;
use crate::store::fs_backend::DOCUMENT_FILE;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Keeps the directory alive until the test is done
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let store = FileStore::in_dir(&root);
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }

    pub fn document_path(&self) -> PathBuf {
        self.root.join(DOCUMENT_FILE)
    }

    pub fn read_document(&self) -> String {
        std::fs::read_to_string(self.document_path()).expect("document should exist")
    }

    pub fn write_document(&self, contents: &str) {
        std::fs::write(self.document_path(), contents).expect("failed to write document");
    }
}
