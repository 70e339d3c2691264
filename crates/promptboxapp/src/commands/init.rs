use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, InitOutcome};

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let path = store.document_path();
    let mut result = CmdResult::default();

    match store.initialize()? {
        InitOutcome::Created => result.add_message(CmdMessage::success(format!(
            "Created prompt store at {}",
            path.display()
        ))),
        InitOutcome::AlreadyPresent => result.add_message(CmdMessage::info(format!(
            "Prompt store already exists at {}",
            path.display()
        ))),
    }

    Ok(result.with_paths(vec![path]))
}
