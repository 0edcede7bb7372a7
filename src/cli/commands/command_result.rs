use std::{collections::BTreeSet, path::PathBuf};

use crate::{core::PooledMatches, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    /// Checks ran over this many entries.
    Check { entries: usize },
    /// Entry list, already rendered in the requested format.
    Entries { rendered: String },
    /// Entry list written to a file.
    EntriesWritten { path: PathBuf, count: usize },
    Matches(PooledMatches),
    /// Extracted words; empty when a dictionary was given.
    Words { words: BTreeSet<String> },
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running bookcheck commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found, sorted. Empty for commands that only print data.
    pub issues: Vec<Issue>,
}
