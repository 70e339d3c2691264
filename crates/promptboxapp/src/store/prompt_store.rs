use super::backend::StorageBackend;
use super::{DataStore, DeleteOutcome, InitOutcome, LoadOutcome, SaveOutcome};
use crate::error::{PromptError, Result, ValidationError};
use crate::model::{Prompt, PromptDocument, PromptInput, PromptRecord, StoredEntry};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// What the backend currently holds, before any fail-soft substitution.
enum DocumentState {
    Missing,
    Unreadable(String),
    Parsed(PromptDocument),
}

/// Prompt CRUD over a single JSON document.
///
/// Assumes a single active writer; see the module docs.
pub struct PromptStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> PromptStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read_state(&self) -> Result<DocumentState> {
        let Some(bytes) = self.backend.read_document()? else {
            return Ok(DocumentState::Missing);
        };
        let raw = match String::from_utf8(bytes) {
            Ok(raw) => raw,
            Err(e) => return Ok(DocumentState::Unreadable(e.to_string())),
        };
        match serde_json::from_str::<PromptDocument>(&raw) {
            Ok(document) => Ok(DocumentState::Parsed(document)),
            Err(e) => Ok(DocumentState::Unreadable(e.to_string())),
        }
    }

    /// Current document for a read-modify-write cycle; unusable documents start over empty.
    fn read_for_update(&self) -> Result<PromptDocument> {
        match self.read_state()? {
            DocumentState::Parsed(document) => Ok(document),
            DocumentState::Missing => Ok(PromptDocument::default()),
            DocumentState::Unreadable(reason) => {
                tracing::warn!(
                    "Prompt store at {} is unreadable ({}); it will be replaced",
                    self.backend.document_path().display(),
                    reason
                );
                Ok(PromptDocument::default())
            }
        }
    }

    fn write(&self, document: &PromptDocument) -> Result<()> {
        self.backend.write_document(&to_pretty_json(document)?)
    }
}

/// Pretty JSON with four-space indentation.
fn to_pretty_json(document: &PromptDocument) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| PromptError::Store(e.to_string()))
}

impl<B: StorageBackend> DataStore for PromptStore<B> {
    fn initialize(&mut self) -> Result<InitOutcome> {
        if self.backend.document_exists() {
            return Ok(InitOutcome::AlreadyPresent);
        }
        self.write(&PromptDocument::default())?;
        tracing::debug!(
            "Created prompt store at {}",
            self.backend.document_path().display()
        );
        Ok(InitOutcome::Created)
    }

    fn load(&self) -> Result<LoadOutcome> {
        match self.read_state()? {
            DocumentState::Parsed(document) => {
                let skipped = document.other_count();
                if skipped > 0 {
                    tracing::warn!(
                        "Skipping {} entries in {} that are not prompts",
                        skipped,
                        self.backend.document_path().display()
                    );
                }
                Ok(LoadOutcome::Loaded(
                    document.records().map(Prompt::from_record).collect(),
                ))
            }
            DocumentState::Missing => {
                tracing::debug!(
                    "No prompt store at {}",
                    self.backend.document_path().display()
                );
                Ok(LoadOutcome::Missing)
            }
            DocumentState::Unreadable(reason) => {
                tracing::warn!(
                    "Could not read prompts from {}: {}",
                    self.backend.document_path().display(),
                    reason
                );
                Ok(LoadOutcome::Unreadable { reason })
            }
        }
    }

    fn save(&mut self, input: &PromptInput) -> Result<SaveOutcome> {
        input.validate()?;

        let mut document = self.read_for_update()?;
        let color = input.effective_color().to_string();

        // A stale original name must not turn an edit into a duplicate.
        let target = document.position(input.resolution_key()).or_else(|| {
            input
                .original_name
                .as_ref()
                .and_then(|_| document.position(&input.name))
        });

        if let Some(holder) = document.position(&input.name) {
            if Some(holder) != target {
                return Err(ValidationError::NameTaken(input.name.clone()).into());
            }
        }

        let outcome = match target.and_then(|index| document.prompts[index].as_record_mut()) {
            Some(record) => {
                let outcome = if record.name == input.name {
                    SaveOutcome::Updated
                } else {
                    SaveOutcome::Renamed {
                        from: record.name.clone(),
                    }
                };
                record.name = input.name.clone();
                record.content = input.content.clone();
                record.color = Some(Value::String(color));
                outcome
            }
            None => {
                let entry = StoredEntry::Prompt(PromptRecord::new(
                    input.name.clone(),
                    input.content.clone(),
                    color,
                ));
                // An unparsed entry under the same name gives way to the new prompt.
                match document.other_position(&input.name) {
                    Some(index) => document.prompts[index] = entry,
                    None => document.prompts.push(entry),
                }
                SaveOutcome::Created
            }
        };

        self.write(&document)?;
        Ok(outcome)
    }

    fn delete(&mut self, name: &str) -> Result<DeleteOutcome> {
        let mut document = match self.read_state()? {
            DocumentState::Parsed(document) => document,
            // Nothing to delete from, and nothing gets rewritten.
            DocumentState::Missing | DocumentState::Unreadable(_) => {
                return Ok(DeleteOutcome::NotFound)
            }
        };

        let found = document.position(name).and_then(|index| {
            document.prompts[index]
                .as_record()
                .map(|record| (index, Prompt::from_record(record)))
        });
        let Some((index, removed)) = found else {
            return Ok(DeleteOutcome::NotFound);
        };

        document.prompts.remove(index);
        self.write(&document)?;
        Ok(DeleteOutcome::Deleted(removed))
    }

    fn document_path(&self) -> PathBuf {
        self.backend.document_path()
    }
}
