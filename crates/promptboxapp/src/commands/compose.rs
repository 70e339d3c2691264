use crate::commands::{helpers::find_prompt, CmdMessage, CmdResult, DisplayPrompt};
use crate::error::Result;
use crate::model::compose_text;
use crate::store::DataStore;

/// Combines the named prompt with free text. The CLI decides where the text goes.
pub fn run<S: DataStore>(store: &S, name: &str, user_text: &str) -> Result<CmdResult> {
    let prompt = find_prompt(store, name)?;
    let composed = compose_text(&prompt.content, user_text);

    let mut result = CmdResult::default();
    if user_text.trim().is_empty() {
        result.add_message(CmdMessage::info("Only the prompt content was used"));
    }
    result.composed = Some(composed);
    Ok(result.with_affected_prompts(vec![DisplayPrompt::new(prompt)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn combines_prompt_and_text() {
        let fixture = StoreFixture::new().with_prompt("Translate", "Translate to French:");
        let result = run(&fixture.store, "Translate", "good morning\n").unwrap();

        assert_eq!(
            result.composed.as_deref(),
            Some("Translate to French: \"good morning\"")
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn blank_text_uses_prompt_alone() {
        let fixture = StoreFixture::new().with_prompt("Translate", "Translate to French:");
        let result = run(&fixture.store, "Translate", "  ").unwrap();

        assert_eq!(result.composed.as_deref(), Some("Translate to French:"));
        assert_eq!(
            result.messages,
            vec![CmdMessage::info("Only the prompt content was used")]
        );
    }

    #[test]
    fn unknown_prompt_is_an_error() {
        let fixture = StoreFixture::new();
        assert!(matches!(
            run(&fixture.store, "Translate", "x"),
            Err(PromptError::NotFound(_))
        ));
    }
}
