use crate::color::{sort_by_similarity, Rgb};
use crate::commands::{CmdMessage, CmdResult, DisplayPrompt, MessageLevel};
use crate::config::ListOrder;
use crate::error::Result;
use crate::store::{DataStore, LoadOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    pub order: ListOrder,
    pub base: Rgb,
}

pub fn run<S: DataStore>(store: &S, options: ListOptions) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let outcome = store.load()?;
    if let LoadOutcome::Unreadable { reason } = &outcome {
        result.add_message(CmdMessage::warning(format!(
            "Could not read prompts ({}); showing an empty list",
            reason
        )));
    }

    let prompts = outcome.into_prompts();
    let prompts = match options.order {
        ListOrder::Similarity => sort_by_similarity(&prompts, options.base),
        ListOrder::Stored => prompts,
    };

    if prompts.is_empty() && !result.has_level(MessageLevel::Warning) {
        result.add_message(CmdMessage::info("No prompts yet"));
    }

    Ok(result.with_listed_prompts(prompts.into_iter().map(DisplayPrompt::new).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TextColor;
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::prompt_store::PromptStore;

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_prompts
            .iter()
            .map(|d| d.prompt.name.as_str())
            .collect()
    }

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_colored_prompt("white", "#FFFFFF")
            .with_colored_prompt("gray", "#444444")
            .with_colored_prompt("near", "#454545")
    }

    #[test]
    fn default_order_is_by_similarity() {
        let result = run(&fixture().store, ListOptions::default()).unwrap();
        assert_eq!(names(&result), ["gray", "near", "white"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn stored_order_is_kept_on_request() {
        let options = ListOptions {
            order: ListOrder::Stored,
            ..Default::default()
        };
        let result = run(&fixture().store, options).unwrap();
        assert_eq!(names(&result), ["white", "gray", "near"]);
    }

    #[test]
    fn base_color_changes_order() {
        let options = ListOptions {
            base: Rgb::WHITE,
            ..Default::default()
        };
        let result = run(&fixture().store, options).unwrap();
        assert_eq!(names(&result), ["white", "near", "gray"]);
    }

    #[test]
    fn listed_prompts_carry_contrast() {
        let result = run(&fixture().store, ListOptions::default()).unwrap();
        let white = &result.listed_prompts[2];
        assert_eq!(white.text_color, TextColor::Black);
        assert_eq!(result.listed_prompts[0].text_color, TextColor::White);
    }

    #[test]
    fn empty_store_says_so() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, ListOptions::default()).unwrap();
        assert!(result.listed_prompts.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info("No prompts yet")]);
    }

    #[test]
    fn unreadable_store_warns_but_succeeds() {
        let store = PromptStore::with_backend(MemBackend::with_document("{\"prompts\": 3}"));
        let result = run(&store, ListOptions::default()).unwrap();
        assert!(result.listed_prompts.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
