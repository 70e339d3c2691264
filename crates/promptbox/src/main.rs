//! # Promptbox CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/promptboxapp/`: UI-agnostic library (store, ordering, commands, API)
//! - `crates/promptbox/`: this CLI, a client of the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/promptbox/src/cli/)                      │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs, handlers.rs)     │
//! │  - Swatches and messages (render.rs, styles.rs)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/promptboxapp/src/api.rs)                 │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer + Store (crates/promptboxapp/src/...)        │
//! │  - Business logic, ordering, persistence                    │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, stdin, confirmation prompts, the clipboard, rendering and exit codes.
//!
//! ## Testing Approach
//!
//! - Handlers run against `PromptApi<InMemoryStore>` and check the rendered text.
//! - Rendering is checked with colors disabled.
//! - `tests/cli_e2e.rs` copies the built binary into a temporary directory, since
//!   the prompt file always lives next to the executable.

mod cli;
mod clipboard;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
