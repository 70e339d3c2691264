use crate::error::{PromptError, Result};
use crate::model::Prompt;
use crate::store::DataStore;

/// Looks a prompt up by exact name. Unreadable stores simply have no prompts.
pub fn find_prompt<S: DataStore>(store: &S, name: &str) -> Result<Prompt> {
    store
        .load()?
        .into_prompts()
        .into_iter()
        .find(|p| p.name == name)
        .ok_or_else(|| PromptError::NotFound(name.to_string()))
}
