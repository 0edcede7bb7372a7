//! Cross-reference rule.
//!
//! Every `<a section="slug"/>` must name a chapter or appendix. Entries that
//! are never referenced are fine, so only one side is checked.

use std::collections::BTreeSet;

use anyhow::Result;

use super::helpers::mismatch;
use crate::{
    core::{CheckContext, NamedSet, match_files, patterns::SECTION_REF},
    issues::{Issue, Rule},
};

pub const TITLE: &str = "Cross-references";

pub fn check_crossref_issues(ctx: &CheckContext) -> Result<Vec<Issue>> {
    let referenced = match_files(&SECTION_REF, ctx.entry_paths(), true, false)?.keys;
    let slugs: BTreeSet<String> = ctx.entries.iter().map(|e| e.slug.clone()).collect();
    Ok(check_crossrefs(&referenced, &slugs).into_iter().collect())
}

/// Compare referenced slugs with known entry slugs.
pub fn check_crossrefs(referenced: &BTreeSet<String>, slugs: &BTreeSet<String>) -> Option<Issue> {
    mismatch(
        Rule::CrossReference,
        TITLE,
        NamedSet::new("text", referenced),
        NamedSet::new("chapters", slugs),
        false,
    )
}
