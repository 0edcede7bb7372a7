use std::{collections::BTreeSet, path::PathBuf};

use anyhow::Result;

use crate::{
    core::{CheckContext, NamedSet, PooledMatches, SetDifference, match_file, patterns::INCLUSION},
    issues::{DuplicateKeyIssue, Issue, KeyMismatchIssue, Rule},
};

/// Build a mismatch issue when the two sets disagree.
pub fn mismatch(
    rule: Rule,
    title: &str,
    left: NamedSet<'_>,
    right: NamedSet<'_>,
    check_only_right: bool,
) -> Option<Issue> {
    SetDifference::compute(title, left, right, check_only_right)
        .map(|difference| Issue::KeyMismatch(KeyMismatchIssue { rule, difference }))
}

/// Turn per-file duplicates of a matcher run into warnings.
pub fn duplicate_issues(rule: Rule, pooled: &PooledMatches, ctx: &CheckContext) -> Vec<Issue> {
    pooled
        .duplicates
        .iter()
        .map(|duplicate| {
            Issue::DuplicateKey(DuplicateKeyIssue {
                rule,
                file_path: ctx.display_path(&duplicate.file),
                keys: duplicate.keys.clone(),
            })
        })
        .collect()
}

/// Inclusion directives of one chapter that owns a directory.
#[derive(Debug, Clone)]
pub struct ChapterInclusions {
    pub slug: String,
    pub dir: PathBuf,
    /// Included file names, relative to `dir`.
    pub includes: BTreeSet<String>,
}

/// Collect inclusion directives for every entry that owns a directory.
///
/// Inclusions are matched without the conditional scrub rules, which would
/// otherwise remove the directives themselves.
pub fn chapter_inclusions(ctx: &CheckContext) -> Result<Vec<ChapterInclusions>> {
    let mut result = Vec::new();
    for (entry, path) in ctx.entries.iter().zip(ctx.entry_paths()) {
        let Some(dir) = ctx.chapter_dir(path) else {
            ctx.note(&format!(
                "skipping inclusions of '{}': its file is in the book root",
                entry.slug
            ));
            continue;
        };
        let matches = match_file(&INCLUSION, path, false, false)?;
        result.push(ChapterInclusions {
            slug: entry.slug.clone(),
            dir,
            includes: matches.keys,
        });
    }
    Ok(result)
}
