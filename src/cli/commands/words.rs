use std::collections::BTreeSet;

use anyhow::{Ok, Result};

use super::super::args::WordsCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    core::words::get_words,
    rules::spelling::{check_spelling, load_dictionary},
};

pub fn words(cmd: WordsCommand) -> Result<CommandResult> {
    let mut words = BTreeSet::new();
    for path in &cmd.files {
        words.extend(get_words(path)?);
    }

    let Some(dictionary) = &cmd.dictionary else {
        return Ok(finish(CommandSummary::Words { words }, Vec::new(), false));
    };

    let dictionary = load_dictionary(dictionary)?;
    let issues = check_spelling(&words, &dictionary).into_iter().collect();
    Ok(finish(
        CommandSummary::Words {
            words: BTreeSet::new(),
        },
        issues,
        true,
    ))
}
