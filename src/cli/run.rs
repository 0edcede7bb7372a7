use std::path::Path;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check::check, entries::entries, init::init, matches::matches},
};

/// Dispatch to the handler of the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with issues and counts, ready for printing
/// - `Err` if the command could not run (unreadable file, invalid config, bad pattern)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Entries(cmd)) => entries(cmd),
        Some(Command::Matches(cmd)) => matches(cmd),
        Some(Command::Words(cmd)) => words(cmd),
        Some(Command::Init) => init(Path::new(".")),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

#[cfg(feature = "words")]
fn words(cmd: super::args::WordsCommand) -> Result<CommandResult> {
    super::commands::words::words(cmd)
}

#[cfg(not(feature = "words"))]
fn words(_cmd: super::args::WordsCommand) -> Result<CommandResult> {
    bail!("The words command requires bookcheck to be built with the 'words' feature")
}
