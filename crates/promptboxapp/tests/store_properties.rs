//! End-to-end store behavior against a real file.

use promptboxapp::color::{contrast_text_color, sort_by_similarity, Rgb, TextColor};
use promptboxapp::error::{PromptError, ValidationError};
use promptboxapp::model::{Prompt, PromptInput};
use promptboxapp::store::fs::FileStore;
use promptboxapp::store::fs_backend::DOCUMENT_FILE;
use promptboxapp::store::{DataStore, DeleteOutcome, LoadOutcome};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::in_dir(dir.path());
    store.initialize().unwrap();
    (dir, store)
}

fn read(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join(DOCUMENT_FILE)).unwrap()
}

#[test]
fn round_trip_yields_exactly_one_entry() {
    let (_dir, mut store) = setup();
    store
        .save(&PromptInput::new("n", "c").with_color("#123456"))
        .unwrap();

    let prompts = store.load().unwrap().into_prompts();
    assert_eq!(prompts, vec![Prompt::new("n", "c", "#123456")]);
}

#[test]
fn rename_is_an_update_in_place() {
    let (dir, mut store) = setup();
    fs::write(
        dir.path().join(DOCUMENT_FILE),
        r#"{"prompts": [{"name": "A", "content": "y"}]}"#,
    )
    .unwrap();

    store
        .save(&PromptInput::new("B", "x").with_color("#111111").renaming("A"))
        .unwrap();

    let prompts = store.load().unwrap().into_prompts();
    assert_eq!(prompts, vec![Prompt::new("B", "x", "#111111")]);
}

#[test]
fn names_stay_unique_across_save_sequences() {
    let (_dir, mut store) = setup();
    let names = ["a", "b", "c"];

    // Every combination of (name, original_name), including stale and self renames.
    for round in 0..3 {
        for name in names {
            for original in [None, Some("a"), Some("b"), Some("c"), Some("ghost")] {
                let mut input = PromptInput::new(name, format!("{name} {round}"));
                if let Some(original) = original {
                    input = input.renaming(original);
                }
                match store.save(&input) {
                    Ok(_) | Err(PromptError::Validation(ValidationError::NameTaken(_))) => {}
                    Err(e) => panic!("unexpected error: {e}"),
                }

                let prompts = store.load().unwrap().into_prompts();
                let unique: HashSet<_> = prompts.iter().map(|p| p.name.clone()).collect();
                assert_eq!(unique.len(), prompts.len(), "duplicate after {input:?}");
            }
        }
    }
}

#[test]
fn validation_failures_leave_file_unchanged() {
    let (dir, mut store) = setup();
    store.save(&PromptInput::new("keep", "me")).unwrap();
    let before = read(&dir);

    assert!(matches!(
        store.save(&PromptInput::new("", "x")),
        Err(PromptError::Validation(ValidationError::EmptyName))
    ));
    assert!(matches!(
        store.save(&PromptInput::new("n", "")),
        Err(PromptError::Validation(ValidationError::EmptyContent))
    ));
    assert_eq!(read(&dir), before);
}

#[test]
fn delete_miss_is_byte_for_byte_noop() {
    let (dir, mut store) = setup();
    store.save(&PromptInput::new("a", "b")).unwrap();
    let before = read(&dir);

    assert_eq!(store.delete("ghost").unwrap(), DeleteOutcome::NotFound);
    assert_eq!(read(&dir), before);
}

#[test]
fn corrupt_document_reads_as_unreadable() {
    let (dir, store) = setup();
    fs::write(dir.path().join(DOCUMENT_FILE), "{\"prompts\": [").unwrap();

    let outcome = store.load().unwrap();
    assert!(matches!(outcome, LoadOutcome::Unreadable { .. }));
    assert!(outcome.prompts().is_empty());
}

#[test]
fn non_utf8_document_reads_as_unreadable() {
    let (dir, mut store) = setup();
    fs::write(dir.path().join(DOCUMENT_FILE), b"{\"prompts\": [\xff\xfe]}").unwrap();

    let outcome = store.load().unwrap();
    assert!(matches!(outcome, LoadOutcome::Unreadable { .. }));
    assert!(outcome.prompts().is_empty());

    store.save(&PromptInput::new("fresh", "start")).unwrap();
    assert!(read(&dir).contains("\"fresh\""));
}

#[test]
fn off_schema_records_survive_a_save() {
    let (dir, mut store) = setup();
    fs::write(
        dir.path().join(DOCUMENT_FILE),
        r##"{"prompts":[{"name":"a","content":"x","color":123},{"name":"b","content":"y","color":"#00FF00"},{"name":"half"}]}"##,
    )
    .unwrap();

    store.save(&PromptInput::new("c", "z")).unwrap();

    let names: Vec<String> = store
        .load()
        .unwrap()
        .into_prompts()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["a", "b", "c"]);

    let document = read(&dir);
    assert!(document.contains("\"color\": 123"));
    assert!(document.contains("\"half\""));
}

#[test]
fn loaded_prompts_sort_and_contrast() {
    let (_dir, mut store) = setup();
    for (name, color) in [("white", "#FFFFFF"), ("near", "#454545"), ("base", "#444444")] {
        store
            .save(&PromptInput::new(name, "x").with_color(color))
            .unwrap();
    }

    let prompts = store.load().unwrap().into_prompts();
    let sorted = sort_by_similarity(&prompts, Rgb::NEUTRAL);
    let names: Vec<_> = sorted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["base", "near", "white"]);

    let text: Vec<_> = sorted.iter().map(|p| contrast_text_color(p.rgb())).collect();
    assert_eq!(text, [TextColor::White, TextColor::White, TextColor::Black]);
}
