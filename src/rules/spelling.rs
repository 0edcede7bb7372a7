//! Spelling rule: words in the text that the dictionary does not know.

use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result};

use super::helpers::mismatch;
use crate::{
    core::NamedSet,
    issues::{Issue, Rule},
    utils::contains_alphabetic,
};

pub const TITLE: &str = "Spelling";

/// Read a word list: one word per line, blank lines and `#` comments skipped.
pub fn load_dictionary(path: &Path) -> Result<BTreeSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}

/// Report words missing from the dictionary.
///
/// Tokens without letters (numbers, punctuation) are never reported.
pub fn check_spelling(words: &BTreeSet<String>, dictionary: &BTreeSet<String>) -> Option<Issue> {
    let words: BTreeSet<String> = words
        .iter()
        .filter(|word| contains_alphabetic(word))
        .map(|word| word.to_lowercase())
        .collect();
    mismatch(
        Rule::Spelling,
        TITLE,
        NamedSet::new("text", &words),
        NamedSet::new("dictionary", dictionary),
        false,
    )
}
