//! Key extraction.
//!
//! Applies a caller-supplied pattern to scrubbed text and collects the keys
//! held by one capture group. A group may hold a comma-separated list
//! (`<span g="alpha,beta">`), so every match can yield several keys.

use std::{
    collections::BTreeSet,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use regex::Regex;

use super::scrub::ScrubRules;

/// A compiled pattern plus the capture group that holds the keys.
#[derive(Debug, Clone)]
pub struct KeyPattern {
    regex: Regex,
    group: usize,
}

impl KeyPattern {
    pub fn new(regex: Regex, group: usize) -> Self {
        Self { regex, group }
    }

    /// Compile `pattern` and read keys from capture group `group`.
    pub fn parse(pattern: &str, group: usize) -> Result<Self> {
        let regex =
            Regex::new(pattern).with_context(|| format!("Invalid pattern: {}", pattern))?;
        if group >= regex.captures_len() {
            anyhow::bail!(
                "Pattern {} has no capture group {} (it has {})",
                pattern,
                group,
                regex.captures_len() - 1
            );
        }
        Ok(Self { regex, group })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn group(&self) -> usize {
        self.group
    }
}

/// Keys found in a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMatches {
    pub keys: BTreeSet<String>,
    /// Keys seen more than once in this file (only when tracking).
    pub duplicates: BTreeSet<String>,
}

/// Duplicate keys reported for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeys {
    pub file: PathBuf,
    pub keys: BTreeSet<String>,
}

/// Keys pooled across a batch of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PooledMatches {
    pub keys: BTreeSet<String>,
    /// Per-file duplicates, in the order the files were given.
    pub duplicates: Vec<DuplicateKeys>,
}

impl PooledMatches {
    /// Write one warning line per file that contained duplicate keys.
    pub fn warn_duplicates_to<W: Write>(&self, writer: &mut W) {
        for duplicate in &self.duplicates {
            let keys: Vec<&str> = duplicate.keys.iter().map(String::as_str).collect();
            let _ = writeln!(
                writer,
                "{} duplicate key(s) in {}: {}",
                "warning:".bold().yellow(),
                duplicate.file.display(),
                keys.join(", ")
            );
        }
    }
}

/// Extract keys from already scrubbed text.
///
/// Every match's capture group is split on `,`; each piece is trimmed and
/// empty pieces are dropped. With `track_duplicates`, a piece that is already
/// in this text's set is recorded as a duplicate.
pub fn match_text(pattern: &KeyPattern, text: &str, track_duplicates: bool) -> FileMatches {
    let mut result = FileMatches::default();
    for captures in pattern.regex.captures_iter(text) {
        let Some(group) = captures.get(pattern.group) else {
            continue;
        };
        for piece in group.as_str().split(',') {
            let key = piece.trim();
            // `a,` or `a,,b` is a stray comma, not an empty key.
            if key.is_empty() {
                continue;
            }
            if !result.keys.insert(key.to_string()) && track_duplicates {
                result.duplicates.insert(key.to_string());
            }
        }
    }
    result
}

/// Read, scrub and extract keys from one file.
pub fn match_file(
    pattern: &KeyPattern,
    path: &Path,
    scrub: bool,
    track_duplicates: bool,
) -> Result<FileMatches> {
    let text = ScrubRules::standard().read_file(path, scrub)?;
    Ok(match_text(pattern, &text, track_duplicates))
}

/// Extract keys from every file and pool them into one set.
///
/// Files are scrubbed and matched in parallel; pooling happens afterwards in
/// the order the files were given. Any unreadable file fails the whole call.
pub fn match_files<P>(
    pattern: &KeyPattern,
    files: &[P],
    scrub: bool,
    track_duplicates: bool,
) -> Result<PooledMatches>
where
    P: AsRef<Path> + Sync,
{
    let per_file: Vec<(PathBuf, Result<FileMatches>)> = files
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            (
                path.to_path_buf(),
                match_file(pattern, path, scrub, track_duplicates),
            )
        })
        .collect();

    let mut pooled = PooledMatches::default();
    for (file, result) in per_file {
        let matches = result?;
        if !matches.duplicates.is_empty() {
            pooled.duplicates.push(DuplicateKeys {
                file,
                keys: matches.duplicates,
            });
        }
        pooled.keys.extend(matches.keys);
    }
    Ok(pooled)
}
