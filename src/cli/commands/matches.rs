use anyhow::{Ok, Result};

use super::super::args::MatchesCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::core::{KeyPattern, match_files};

pub fn matches(cmd: MatchesCommand) -> Result<CommandResult> {
    let pattern = KeyPattern::parse(&cmd.pattern, cmd.group)?;
    let pooled = match_files(&pattern, &cmd.files, !cmd.no_scrub, cmd.duplicates)?;
    Ok(finish(CommandSummary::Matches(pooled), Vec::new(), false))
}
