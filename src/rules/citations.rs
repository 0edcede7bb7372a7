//! Citation rule.
//!
//! Every `<cite>key</cite>` must name a bibliography entry and every
//! bibliography entry must be cited somewhere.

use std::collections::BTreeSet;

use anyhow::Result;

use super::helpers::{duplicate_issues, mismatch};
use crate::{
    core::{CheckContext, NamedSet, book::bibliography_keys, match_files, patterns::CITATION},
    issues::{DuplicateKeyIssue, Issue, Rule},
};

pub const TITLE: &str = "Citations";

pub fn check_citation_issues(ctx: &CheckContext) -> Result<Vec<Issue>> {
    let bibliography = ctx.load_bibliography()?;
    let declared = bibliography_keys(&bibliography);
    let pooled = match_files(&CITATION, ctx.entry_paths(), true, true)?;

    let mut issues = duplicate_issues(Rule::Citation, &pooled, ctx);
    if !declared.duplicates.is_empty() {
        issues.push(Issue::DuplicateKey(DuplicateKeyIssue {
            rule: Rule::Citation,
            file_path: ctx.display_path(&ctx.bibliography_path()),
            keys: declared.duplicates.clone(),
        }));
    }
    issues.extend(check_citations(&declared.keys, &pooled.keys));
    Ok(issues)
}

/// Compare bibliography keys with cited keys.
pub fn check_citations(declared: &BTreeSet<String>, cited: &BTreeSet<String>) -> Option<Issue> {
    mismatch(
        Rule::Citation,
        TITLE,
        NamedSet::new("bibliography", declared),
        NamedSet::new("text", cited),
        true,
    )
}
