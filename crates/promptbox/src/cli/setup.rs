use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "promptbox",
    bin_name = "promptbox",
    version,
    disable_help_subcommand = true,
    after_help = "Prompts are stored in prompts.json next to the promptbox executable."
)]
#[command(about = "Keep reusable prompts one command away, in color", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create the prompt store if it does not exist yet
    #[command(display_order = 1)]
    Init,

    /// List prompts as color swatches
    #[command(alias = "ls", display_order = 2)]
    List(ListArgs),

    /// Show one prompt in full
    #[command(alias = "view", display_order = 3)]
    Show {
        /// Name of the prompt
        name: String,
    },

    /// Create a prompt, or update/rename an existing one
    #[command(display_order = 4)]
    Save(SaveArgs),

    /// Delete a prompt
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Name of the prompt
        name: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Combine a prompt with some text and copy it to the clipboard
    #[command(display_order = 6)]
    Copy(CopyArgs),

    /// Print the location of the prompt store
    #[command(display_order = 7)]
    Path,
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Keep the stored order instead of sorting by color
    #[arg(long)]
    pub stored_order: bool,

    /// Sort around this color instead of the configured one (#RRGGBB)
    #[arg(long, value_name = "COLOR", conflicts_with = "stored_order")]
    pub base: Option<String>,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct SaveArgs {
    /// Name of the prompt
    pub name: String,

    /// Prompt text (read from stdin when omitted and stdin is piped)
    #[arg(trailing_var_arg = true)]
    pub content: Vec<String>,

    /// Swatch color (#RRGGBB, defaults to #444444)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Current name of the prompt being edited
    #[arg(long, value_name = "ORIGINAL_NAME")]
    pub rename: Option<String>,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct CopyArgs {
    /// Name of the prompt
    pub name: String,

    /// Text to append to the prompt (read from stdin when omitted and stdin is piped)
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Print the result instead of copying it
    #[arg(short, long)]
    pub print: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = parse(&["promptbox"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn list_alias_and_flags() {
        let cli = parse(&["promptbox", "ls", "--base", "#FFFFFF"]);
        assert_eq!(
            cli.command,
            Some(Commands::List(ListArgs {
                stored_order: false,
                base: Some("#FFFFFF".to_string()),
            }))
        );
    }

    #[test]
    fn stored_order_conflicts_with_base() {
        assert!(
            Cli::try_parse_from(["promptbox", "list", "--stored-order", "--base", "#000000"])
                .is_err()
        );
    }

    #[test]
    fn save_collects_content_words() {
        let cli = parse(&[
            "promptbox", "save", "--color", "#FF0000", "--rename", "Old", "New", "Fix", "this",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Save(SaveArgs {
                name: "New".to_string(),
                content: vec!["Fix".to_string(), "this".to_string()],
                color: Some("#FF0000".to_string()),
                rename: Some("Old".to_string()),
            }))
        );
    }

    #[test]
    fn delete_with_yes() {
        let cli = parse(&["promptbox", "rm", "-y", "Old"]);
        assert_eq!(
            cli.command,
            Some(Commands::Delete {
                name: "Old".to_string(),
                yes: true,
            })
        );
    }

    #[test]
    fn copy_with_text_and_print() {
        let cli = parse(&["promptbox", "copy", "-p", "Translate", "good", "morning"]);
        assert_eq!(
            cli.command,
            Some(Commands::Copy(CopyArgs {
                name: "Translate".to_string(),
                text: vec!["good".to_string(), "morning".to_string()],
                print: true,
            }))
        );
    }

    #[test]
    fn verbose_is_global() {
        let cli = parse(&["promptbox", "path", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Commands::Path));
    }
}
