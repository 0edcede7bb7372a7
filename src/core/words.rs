//! Word extraction for spell-checking.
//!
//! Text is scrubbed, reference spans and citations are blanked out, links are
//! reduced to their visible text, and what remains is tokenized.

use std::{collections::BTreeSet, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use super::scrub::ScrubRules;

// Words (with inner apostrophes or hyphens), numbers, or any other single
// non-space character.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{L}[\p{L}\p{M}]*(?:['’\-]\p{L}[\p{L}\p{M}]*)*|\d+(?:[.,]\d+)*|\S").unwrap()
});

pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Extract the set of tokens from raw source text.
pub fn extract_words(rules: &ScrubRules, text: &str) -> BTreeSet<String> {
    let text = rules.scrub(text, true);
    let text = rules.strip_spans(&text);
    let text = rules.keep_link_text(&text);
    tokenize(&text).into_iter().map(String::from).collect()
}

/// Extract the set of tokens from a source file.
pub fn get_words(path: &Path) -> Result<BTreeSet<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(extract_words(ScrubRules::standard(), &text))
}
