use std::collections::HashSet;

use anyhow::{Ok, Result, bail};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        chunks::check_chunk_issues, citations::check_citation_issues,
        crossref::check_crossref_issues, glossary::check_glossary_issues,
        helpers::chapter_inclusions, inclusions::check_inclusion_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Gloss,
    Xref,
    Cite,
    Include,
    Chunks,
    /// Words missing from the configured dictionary
    Spell,
}

impl CheckRule {
    /// Checks run when none are named. Spelling needs a dictionary, so it is
    /// only part of the default set when one is configured.
    pub fn defaults(ctx: &CheckContext) -> Vec<CheckRule> {
        let mut rules = vec![
            CheckRule::Gloss,
            CheckRule::Xref,
            CheckRule::Cite,
            CheckRule::Include,
            CheckRule::Chunks,
        ];
        if cfg!(feature = "words") && ctx.config.dictionary.is_some() {
            rules.push(CheckRule::Spell);
        }
        rules
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::defaults(&ctx)
    } else {
        let mut seen = HashSet::new();
        cmd.checks
            .iter()
            .copied()
            .filter(|check| seen.insert(*check))
            .collect()
    };

    let chapters = if checks
        .iter()
        .any(|check| matches!(check, CheckRule::Include | CheckRule::Chunks))
    {
        chapter_inclusions(&ctx)?
    } else {
        Vec::new()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Gloss => all_issues.extend(check_glossary_issues(&ctx)?),
            CheckRule::Xref => all_issues.extend(check_crossref_issues(&ctx)?),
            CheckRule::Cite => all_issues.extend(check_citation_issues(&ctx)?),
            CheckRule::Include => all_issues.extend(check_inclusion_issues(&ctx, &chapters)),
            CheckRule::Chunks => all_issues.extend(check_chunk_issues(&ctx, &chapters)?),
            CheckRule::Spell => all_issues.extend(check_spelling_issues(&ctx)?),
        }
    }

    Ok(finish(
        CommandSummary::Check {
            entries: ctx.entries.len(),
        },
        all_issues,
        true,
    ))
}

#[cfg(feature = "words")]
fn check_spelling_issues(ctx: &CheckContext) -> Result<Vec<Issue>> {
    use std::collections::BTreeSet;

    use crate::{
        core::words::get_words,
        rules::spelling::{check_spelling, load_dictionary},
    };

    let Some(dictionary) = &ctx.config.dictionary else {
        bail!("No dictionary configured: set 'dictionary' in .bookcheck.json");
    };
    let dictionary = load_dictionary(&ctx.root_dir.join(dictionary))?;

    let mut words = BTreeSet::new();
    for path in ctx.entry_paths() {
        words.extend(get_words(path)?);
    }
    ctx.note(&format!("{} distinct words in the text", words.len()));

    Ok(check_spelling(&words, &dictionary).into_iter().collect())
}

#[cfg(not(feature = "words"))]
fn check_spelling_issues(_ctx: &CheckContext) -> Result<Vec<Issue>> {
    bail!("Spell-checking requires bookcheck to be built with the 'words' feature")
}
