//! Glossary consistency rule.
//!
//! Every `<span g="key">` reference must name a glossary entry, and every
//! glossary entry must be referenced from a chapter or from another entry's
//! definition.

use std::collections::BTreeSet;

use anyhow::Result;

use super::helpers::{duplicate_issues, mismatch};
use crate::{
    core::{
        CheckContext, NamedSet,
        book::{glossary_keys, glossary_references},
        match_files,
        patterns::GLOSS_REF,
    },
    issues::{DuplicateKeyIssue, Issue, Rule},
};

pub const TITLE: &str = "Glossary";

pub fn check_glossary_issues(ctx: &CheckContext) -> Result<Vec<Issue>> {
    let glossary = ctx.load_glossary()?;
    let declared = glossary_keys(&glossary);

    let pooled = match_files(&GLOSS_REF, ctx.entry_paths(), true, true)?;
    let mut used = pooled.keys.clone();
    used.extend(glossary_references(&glossary));

    let mut issues = duplicate_issues(Rule::Glossary, &pooled, ctx);
    if !declared.duplicates.is_empty() {
        issues.push(Issue::DuplicateKey(DuplicateKeyIssue {
            rule: Rule::Glossary,
            file_path: ctx.display_path(&ctx.glossary_path()),
            keys: declared.duplicates.clone(),
        }));
    }
    issues.extend(check_glossary_keys(&declared.keys, &used));
    Ok(issues)
}

/// Compare declared glossary keys with referenced ones.
pub fn check_glossary_keys(declared: &BTreeSet<String>, used: &BTreeSet<String>) -> Option<Issue> {
    mismatch(
        Rule::Glossary,
        TITLE,
        NamedSet::new("glossary", declared),
        NamedSet::new("text", used),
        true,
    )
}
