//! # CLI Behavior
//!
//! This is **one possible UI client** for promptbox. It is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`promptbox`)
//!
//! Running `promptbox` with no arguments lists the prompts, closest to the configured
//! base color first.
//!
//! ## Content Sources
//!
//! `save` and `copy` take their text from the trailing words. When there are none and
//! stdin is piped, stdin is read instead:
//!
//! ```bash
//! git diff | promptbox save "Review" --color "#1E90FF"
//! promptbox copy Translate "good morning"
//! ```
//!
//! ## Confirmation
//!
//! `delete` asks before removing a prompt when stdin is a terminal. `--yes` skips the
//! question; piped invocations never ask.
//!
//! ## Module Structure
//!
//! - `commands`: entry point, logging, context setup, dispatch
//! - `handlers`: per-command functions that call the API and render
//! - `render`: swatches, prompt views and messages
//! - `setup`: argument parsing via clap
//! - `styles`: color helpers

mod commands;
mod handlers;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
