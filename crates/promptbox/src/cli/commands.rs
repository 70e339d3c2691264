//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging**: `RUST_LOG` when set, otherwise `warn`, or `debug` with `--verbose`
//! 3. **Context Setup**: Locate the install directory and initialize the API
//! 4. **Dispatch**: Route commands to handlers, resolving stdin and confirmations
//! 5. **Error Handling**: Errors bubble up to `main`, which prints them and exits 1

use super::handlers;
use super::setup::{Cli, Commands, CopyArgs, ListArgs};
use crate::clipboard::copy_to_clipboard;
use anyhow::{Context, Result};
use clap::Parser;
use promptboxapp::init::{initialize, install_dir};
use std::io::{self, BufRead, IsTerminal, Read, Write};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let install_dir = install_dir().context("Could not locate the promptbox executable")?;
    tracing::debug!("Install directory: {}", install_dir.display());
    let mut ctx = initialize(&install_dir)?;

    let output = match cli.command.unwrap_or(Commands::List(ListArgs::default())) {
        Commands::Init => handlers::init(&mut ctx.api)?,
        Commands::List(args) => handlers::list(&ctx.api, &args)?,
        Commands::Show { name } => handlers::show(&ctx.api, &name)?,
        Commands::Save(args) => {
            let content = resolve_text(&args.content)?;
            handlers::save(&mut ctx.api, args, content)?
        }
        Commands::Delete { name, yes } => {
            if !yes && !confirm(&format!("Delete prompt '{}'?", name))? {
                eprintln!("Cancelled");
                return Ok(());
            }
            handlers::delete(&mut ctx.api, &name)?
        }
        Commands::Copy(CopyArgs { name, text, print }) => {
            let text = resolve_text(&text)?;
            handlers::copy(&ctx.api, &name, &text, print, copy_to_clipboard)?
        }
        Commands::Path => handlers::path(&ctx.api)?,
    };

    print!("{}", output);
    io::stdout().flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Trailing words joined by spaces, or stdin when there are none and it is piped.
fn resolve_text(words: &[String]) -> Result<String> {
    if !words.is_empty() || io::stdin().is_terminal() {
        return Ok(words.join(" "));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
}

/// Asks on stderr. Without a terminal on stdin there is nobody to ask, so the answer is yes.
fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(true);
    }

    eprint!("{} [y/N] ", question);
    io::stderr().flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
