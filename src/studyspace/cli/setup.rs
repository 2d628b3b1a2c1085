use clap::Parser;
use std::path::PathBuf;
use studyspace::error::{Result, StudyError};

#[derive(Parser, Debug)]
#[command(name = "studyspace", bin_name = "studyspace", version)]
#[command(about = "Notes, study materials and a PDF library in one dashboard", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the user config dir
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print views as JSON
    #[arg(long)]
    pub json: bool,

    /// Start with empty collections
    #[arg(long)]
    pub no_samples: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Go(String),
    Search(String),
    Filter(String),
    New,
    Set { field: String, value: String },
    Save,
    Cancel,
    Remove(usize),
    Show,
    Stats,
    Help,
    Quit,
}

pub const HELP: &[(&str, &str)] = &[
    ("go <section>", "Switch to dashboard, notes, materials or documents"),
    ("search [text]", "Filter the list by text, empty to clear"),
    ("filter <type|all>", "Filter the list by type"),
    ("new", "Open the create form"),
    ("set <field> <value>", "Fill in a form field"),
    ("save", "Submit the form"),
    ("cancel", "Discard the form"),
    ("rm <n>", "Delete the record at position n"),
    ("show", "Print the current section"),
    ("stats", "Print quick stats"),
    ("help", "Print this help"),
    ("quit", "End the session"),
];

/// Parses a session line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "go" | "cd" => {
            if rest.is_empty() {
                return Err(usage("go <section>"));
            }
            SessionCommand::Go(rest.to_string())
        }
        "search" | "s" => SessionCommand::Search(rest.to_string()),
        "filter" | "f" => SessionCommand::Filter(rest.to_string()),
        "new" | "n" => SessionCommand::New,
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(usage("set <field> <value>"));
            }
            SessionCommand::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "save" => SessionCommand::Save,
        "cancel" => SessionCommand::Cancel,
        "rm" | "delete" => {
            let position = rest
                .parse()
                .map_err(|_| StudyError::Command(format!("Invalid position: {}", rest)))?;
            SessionCommand::Remove(position)
        }
        "show" | "ls" => SessionCommand::Show,
        "stats" => SessionCommand::Stats,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(StudyError::Command(format!("Unknown command: {}", other))),
    };
    Ok(Some(command))
}

fn usage(form: &str) -> StudyError {
    StudyError::Command(format!("Usage: {}", form))
}
