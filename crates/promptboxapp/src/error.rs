use thiserror::Error;

/// Reasons a `save` is refused before anything touches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Prompt name cannot be empty")]
    EmptyName,

    #[error("Prompt content cannot be empty")]
    EmptyContent,

    #[error("Invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    #[error("A prompt named '{0}' already exists")]
    NameTaken(String),
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Prompt not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, PromptError>;
