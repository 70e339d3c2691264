use crate::commands::{helpers::find_prompt, CmdResult, DisplayPrompt};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    let prompt = find_prompt(store, name)?;
    Ok(CmdResult::default().with_listed_prompts(vec![DisplayPrompt::new(prompt)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TextColor;
    use crate::error::PromptError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_prompt_with_contrast() {
        let fixture = StoreFixture::new().with_colored_prompt("Bright", "#FFFFEE");
        let result = run(&fixture.store, "Bright").unwrap();

        assert_eq!(result.listed_prompts.len(), 1);
        assert_eq!(result.listed_prompts[0].prompt.name, "Bright");
        assert_eq!(result.listed_prompts[0].text_color, TextColor::Black);
    }

    #[test]
    fn missing_prompt_is_an_error() {
        let fixture = StoreFixture::new().with_prompts(2);
        assert!(matches!(
            run(&fixture.store, "nope"),
            Err(PromptError::NotFound(name)) if name == "nope"
        ));
    }
}
