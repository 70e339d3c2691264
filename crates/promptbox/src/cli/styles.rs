//! Terminal styling for the promptbox CLI.
//!
//! Two kinds of styling exist:
//!
//! 1. **Swatches**: a prompt's name drawn on its own color, with black or white text
//!    picked by the library's contrast rule. These use 24-bit color.
//! 2. **Semantic styles**: message levels and secondary text, drawn with the basic
//!    palette so they follow the terminal theme.
//!
//! Everything goes through `colored`, which honors `NO_COLOR` and the override set in
//! `commands::run` when stdout is not a terminal. With colors off every helper returns
//! its input unchanged, which is what the tests rely on.

use colored::Colorize;
use promptboxapp::api::MessageLevel;
use promptboxapp::color::{Rgb, TextColor};

pub fn swatch(text: &str, background: Rgb, foreground: TextColor) -> String {
    let fg = foreground.rgb();
    text.truecolor(fg.r, fg.g, fg.b)
        .on_truecolor(background.r, background.g, background.b)
        .to_string()
}

pub fn muted(text: &str) -> String {
    text.dimmed().to_string()
}

pub fn level_icon(level: MessageLevel) -> String {
    match level {
        MessageLevel::Info => "ℹ".blue().to_string(),
        MessageLevel::Success => "✓".green().to_string(),
        MessageLevel::Warning => "⚠".yellow().to_string(),
        MessageLevel::Error => "✗".red().to_string(),
    }
}

pub fn level_text(level: MessageLevel, text: &str) -> String {
    match level {
        MessageLevel::Info => text.to_string(),
        MessageLevel::Success => text.green().to_string(),
        MessageLevel::Warning => text.yellow().to_string(),
        MessageLevel::Error => text.red().to_string(),
    }
}
