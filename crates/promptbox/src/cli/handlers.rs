//! Command handlers for the promptbox CLI.
//!
//! Each handler calls one API method and renders the `CmdResult`. Handlers are generic
//! over the store so tests can drive them with `InMemoryStore`. Terminal concerns that
//! need a real process (stdin, confirmation) are resolved in `commands.rs` before a
//! handler runs; the clipboard is passed in as a closure.

use super::render;
use super::setup::{ListArgs, SaveArgs};
use promptboxapp::api::{CmdMessage, ListOptions, ListOrder, PromptApi};
use promptboxapp::color::Rgb;
use promptboxapp::error::Result;
use promptboxapp::model::PromptInput;
use promptboxapp::store::DataStore;

pub fn init<S: DataStore>(api: &mut PromptApi<S>) -> Result<String> {
    let result = api.init()?;
    Ok(render::render_messages(&result.messages))
}

pub fn list<S: DataStore>(api: &PromptApi<S>, args: &ListArgs) -> Result<String> {
    let mut options = api.list_options();
    if args.stored_order {
        options.order = ListOrder::Stored;
    }
    if let Some(base) = &args.base {
        options = ListOptions {
            order: ListOrder::Similarity,
            base: Rgb::from_hex(base)?,
        };
    }

    let result = api.list_prompts_with(options)?;
    Ok(render::render_list(&result))
}

pub fn show<S: DataStore>(api: &PromptApi<S>, name: &str) -> Result<String> {
    let result = api.view_prompt(name)?;
    Ok(result
        .listed_prompts
        .iter()
        .map(render::render_prompt)
        .collect())
}

/// `content` is the resolved prompt text (trailing words or stdin).
pub fn save<S: DataStore>(api: &mut PromptApi<S>, args: SaveArgs, content: String) -> Result<String> {
    let mut input = PromptInput::new(args.name, content);
    if let Some(color) = args.color {
        input = input.with_color(color);
    }
    if let Some(original) = args.rename {
        input = input.renaming(original);
    }

    let result = api.save_prompt(input)?;
    Ok(render::render_modification(&result))
}

pub fn delete<S: DataStore>(api: &mut PromptApi<S>, name: &str) -> Result<String> {
    let result = api.delete_prompt(name)?;
    Ok(render::render_messages(&result.messages))
}

/// Combines the prompt with `text`. With `print` the combined text is the output;
/// otherwise it goes through `clipboard` and a confirmation is returned.
pub fn copy<S, F>(
    api: &PromptApi<S>,
    name: &str,
    text: &str,
    print: bool,
    clipboard: F,
) -> Result<String>
where
    S: DataStore,
    F: FnOnce(&str) -> Result<()>,
{
    let mut result = api.compose(name, text)?;
    let composed = result.composed.take().unwrap_or_default();

    if print {
        return Ok(format!("{}\n", composed));
    }

    clipboard(&composed)?;
    result.add_message(CmdMessage::success(format!(
        "Copied '{}' to the clipboard",
        name
    )));
    Ok(render::render_messages(&result.messages))
}

pub fn path<S: DataStore>(api: &PromptApi<S>) -> Result<String> {
    let result = api.paths()?;
    Ok(render::render_paths(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptboxapp::error::{PromptError, ValidationError};
    use promptboxapp::store::memory::InMemoryStore;
    use std::cell::RefCell;

    fn make_api() -> PromptApi<InMemoryStore> {
        colored::control::set_override(false);
        PromptApi::new(InMemoryStore::new(), ListOptions::default())
    }

    fn save_args(name: &str, color: Option<&str>, rename: Option<&str>) -> SaveArgs {
        SaveArgs {
            name: name.to_string(),
            content: Vec::new(),
            color: color.map(str::to_string),
            rename: rename.map(str::to_string),
        }
    }

    fn no_clipboard(_: &str) -> Result<()> {
        panic!("clipboard should not be used");
    }

    #[test]
    fn save_then_list_sorted_by_color() {
        let mut api = make_api();
        save(&mut api, save_args("White", Some("#FFFFFF"), None), "w".into()).unwrap();
        save(&mut api, save_args("Near", Some("#454545"), None), "n".into()).unwrap();
        save(&mut api, save_args("Gray", None, None), "g".into()).unwrap();

        let out = list(&api, &ListArgs::default()).unwrap();
        assert_eq!(out, " Gray   g\n Near   n\n White  w\n");

        let stored = list(
            &api,
            &ListArgs {
                stored_order: true,
                base: None,
            },
        )
        .unwrap();
        assert_eq!(stored, " White  w\n Near   n\n Gray   g\n");

        let around_white = list(
            &api,
            &ListArgs {
                stored_order: false,
                base: Some("#ffffff".to_string()),
            },
        )
        .unwrap();
        assert!(around_white.starts_with(" White"));
    }

    #[test]
    fn list_rejects_bad_base() {
        let api = make_api();
        let err = list(
            &api,
            &ListArgs {
                stored_order: false,
                base: Some("white".to_string()),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PromptError::Validation(ValidationError::InvalidColor(_))
        ));
    }

    #[test]
    fn save_reports_rename() {
        let mut api = make_api();
        save(&mut api, save_args("Old", None, None), "x".into()).unwrap();
        let out = save(&mut api, save_args("New", None, Some("Old")), "y".into()).unwrap();
        assert!(out.contains("Prompt 'Old' renamed to 'New'"));

        let shown = show(&api, "New").unwrap();
        assert_eq!(shown, " New   #444444\n\ny\n");
        assert!(matches!(show(&api, "Old"), Err(PromptError::NotFound(_))));
    }

    #[test]
    fn save_validation_error_propagates() {
        let mut api = make_api();
        let err = save(&mut api, save_args("Empty", None, None), "  ".into()).unwrap_err();
        assert!(matches!(
            err,
            PromptError::Validation(ValidationError::EmptyContent)
        ));
    }

    #[test]
    fn delete_missing_is_a_warning() {
        let mut api = make_api();
        let out = delete(&mut api, "Ghost").unwrap();
        assert_eq!(out, "⚠ Prompt 'Ghost' not found\n");
    }

    #[test]
    fn copy_prints_composed_text() {
        let mut api = make_api();
        save(&mut api, save_args("Translate", None, None), "Translate to French:".into())
            .unwrap();

        let out = copy(&api, "Translate", "good morning", true, no_clipboard).unwrap();
        assert_eq!(out, "Translate to French: \"good morning\"\n");
    }

    #[test]
    fn copy_sends_to_clipboard() {
        let mut api = make_api();
        save(&mut api, save_args("Fix", None, None), "Fix this".into()).unwrap();

        let copied = RefCell::new(String::new());
        let out = copy(&api, "Fix", "", false, |text: &str| {
            copied.borrow_mut().push_str(text);
            Ok(())
        })
        .unwrap();

        assert_eq!(*copied.borrow(), "Fix this");
        assert!(out.contains("Only the prompt content was used"));
        assert!(out.contains("Copied 'Fix' to the clipboard"));
    }

    #[test]
    fn copy_unknown_prompt_fails() {
        let api = make_api();
        assert!(matches!(
            copy(&api, "Nope", "x", true, no_clipboard),
            Err(PromptError::NotFound(_))
        ));
    }

    #[test]
    fn init_and_path() {
        let mut api = make_api();
        let out = init(&mut api).unwrap();
        assert!(out.contains("memory://prompts.json"));
        assert_eq!(path(&api).unwrap(), "memory://prompts.json\n");
    }
}
