use crate::commands::{CmdMessage, CmdResult, DisplayPrompt};
use crate::error::Result;
use crate::model::{Prompt, PromptInput};
use crate::store::{DataStore, SaveOutcome};

pub fn run<S: DataStore>(store: &mut S, input: PromptInput) -> Result<CmdResult> {
    let outcome = store.save(&input)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(match &outcome {
        SaveOutcome::Created => format!("Prompt '{}' saved", input.name),
        SaveOutcome::Updated => format!("Prompt '{}' updated", input.name),
        SaveOutcome::Renamed { from } => {
            format!("Prompt '{}' renamed to '{}'", from, input.name)
        }
    }));

    let color = input.effective_color().to_string();
    let saved = Prompt::new(input.name, input.content, color);
    Ok(result.with_affected_prompts(vec![DisplayPrompt::new(saved)]))
}
