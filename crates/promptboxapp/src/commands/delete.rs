use crate::commands::{CmdMessage, CmdResult, DisplayPrompt};
use crate::error::Result;
use crate::store::{DataStore, DeleteOutcome};

pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.delete(name)? {
        DeleteOutcome::Deleted(prompt) => {
            result.add_message(CmdMessage::success(format!("Prompt '{}' deleted", name)));
            result.affected_prompts.push(DisplayPrompt::new(prompt));
        }
        DeleteOutcome::NotFound => {
            result.add_message(CmdMessage::warning(format!("Prompt '{}' not found", name)));
        }
    }

    Ok(result)
}
