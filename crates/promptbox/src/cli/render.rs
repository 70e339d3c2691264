//! Rendering of command results for the terminal.
//!
//! Every function returns a `String` ready to print; nothing here writes to stdout.

use super::styles;
use promptboxapp::api::{CmdMessage, CmdResult, DisplayPrompt};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns given to the content preview in listings.
const PREVIEW_WIDTH: usize = 48;

/// One swatch per prompt, names aligned, followed by the command messages.
pub fn render_list(result: &CmdResult) -> String {
    let name_width = result
        .listed_prompts
        .iter()
        .map(|dp| dp.prompt.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for dp in &result.listed_prompts {
        let label = format!(" {} ", pad_to_width(&dp.prompt.name, name_width));
        out.push_str(&format!(
            "{}  {}\n",
            swatch(dp, &label),
            styles::muted(&preview(&dp.prompt.content, PREVIEW_WIDTH))
        ));
    }
    out.push_str(&render_messages(&result.messages));
    out
}

/// Full view of a single prompt: swatch header, color, then the content verbatim.
pub fn render_prompt(dp: &DisplayPrompt) -> String {
    let label = format!(" {} ", dp.prompt.name);
    format!(
        "{}  {}\n\n{}\n",
        swatch(dp, &label),
        styles::muted(&dp.prompt.color),
        dp.prompt.content
    )
}

/// Messages followed by the swatch of each affected prompt.
pub fn render_modification(result: &CmdResult) -> String {
    let mut out = render_messages(&result.messages);
    for dp in &result.affected_prompts {
        let label = format!(" {} ", dp.prompt.name);
        out.push_str(&format!("  {}\n", swatch(dp, &label)));
    }
    out
}

pub fn render_paths(result: &CmdResult) -> String {
    result
        .paths
        .iter()
        .map(|path| format!("{}\n", path.display()))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            format!(
                "{} {}\n",
                styles::level_icon(m.level),
                styles::level_text(m.level, &m.content)
            )
        })
        .collect()
}

fn swatch(dp: &DisplayPrompt, label: &str) -> String {
    styles::swatch(label, dp.prompt.rgb(), dp.text_color)
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

/// First line of `content`, cut to `max_width` columns with an ellipsis when longer.
fn preview(content: &str, max_width: usize) -> String {
    let first_line = content.lines().next().unwrap_or("").trim_end();
    let more_lines = content.trim_end().lines().nth(1).is_some();

    if first_line.width() <= max_width && !more_lines {
        return first_line.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in first_line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
