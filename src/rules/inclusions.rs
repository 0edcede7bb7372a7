//! Inclusion rule.
//!
//! Each chapter directory should contain exactly the files its `index.md`
//! includes: nothing included may be missing and nothing present may be
//! left unused. Files matching the configured ignores (figures, the chapter
//! page itself) are not expected to be included.

use std::collections::BTreeSet;

use super::helpers::{ChapterInclusions, mismatch};
use crate::{
    core::{CheckContext, NamedSet, file_scanner::scan_chapter_files},
    issues::{Issue, Rule},
};

pub fn check_inclusion_issues(
    ctx: &CheckContext,
    chapters: &[ChapterInclusions],
) -> Vec<Issue> {
    chapters
        .iter()
        .filter_map(|chapter| {
            let scan = scan_chapter_files(&chapter.dir, &ctx.config.ignores, ctx.verbose);
            check_chapter_inclusions(&chapter.slug, &scan.files, &chapter.includes)
        })
        .collect()
}

/// Compare the files present in a chapter directory with the files it includes.
pub fn check_chapter_inclusions(
    slug: &str,
    present: &BTreeSet<String>,
    included: &BTreeSet<String>,
) -> Option<Issue> {
    mismatch(
        Rule::Inclusion,
        slug,
        NamedSet::new("files", present),
        NamedSet::new("includes", included),
        true,
    )
}
