//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run book checks (glossary, cross-references, citations, inclusions, chunks)
//! - `entries`: Print the chapter and appendix entries derived from the book configuration
//! - `matches`: Print the keys a pattern extracts from a set of files
//! - `words`: Print the words of a set of files, or those missing from a dictionary
//! - `init`: Initialize bookcheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by commands that read a book.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Book root directory (default: current directory)
    #[arg(long, env = "BOOKCHECK_ROOT")]
    pub root: Option<PathBuf>,

    /// Book configuration file, relative to the root (overrides config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Glossary file, relative to the root (overrides config file)
    #[arg(long)]
    pub glossary: Option<PathBuf>,

    /// Bibliography file, relative to the root (overrides config file)
    #[arg(long)]
    pub bibliography: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Checks to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Args)]
pub struct EntriesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the entries to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MatchesCommand {
    /// Regular expression with at least one capture group
    #[arg(short, long)]
    pub pattern: String,

    /// Capture group holding the (comma-separated) keys
    #[arg(short, long, default_value_t = 1)]
    pub group: usize,

    /// Keep inclusion directives and continuation markers
    #[arg(long)]
    pub no_scrub: bool,

    /// Warn about keys repeated within a file
    #[arg(long)]
    pub duplicates: bool,

    /// Files to read
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct WordsCommand {
    /// Report words missing from this word list instead of printing all words
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Files to read
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check glossary, cross-reference, citation and inclusion consistency
    Check(CheckCommand),
    /// Print the chapter and appendix entries of the book
    Entries(EntriesCommand),
    /// Print the keys a pattern extracts from files
    Matches(MatchesCommand),
    /// Print the words of files (requires the `words` feature)
    Words(WordsCommand),
    /// Initialize a new .bookcheck.json configuration file
    Init,
}
