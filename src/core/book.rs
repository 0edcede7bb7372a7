//! Glossary and bibliography documents.

use std::collections::BTreeSet;

use serde::Deserialize;

use super::{matcher::match_text, patterns::GLOSS_DEF_REF};

/// One glossary definition.
#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryEntry {
    pub key: String,
    #[serde(default)]
    pub term: Option<String>,
    /// Markdown definition; may link other entries with `[text](#key)`.
    #[serde(default)]
    pub def: Option<String>,
}

/// One bibliography entry. Only the key matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct BibEntry {
    pub key: String,
}

/// Declared keys plus any key declared more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredKeys {
    pub keys: BTreeSet<String>,
    pub duplicates: BTreeSet<String>,
}

fn declared<'a>(keys: impl Iterator<Item = &'a str>) -> DeclaredKeys {
    let mut result = DeclaredKeys::default();
    for key in keys {
        let key = key.trim();
        if !result.keys.insert(key.to_string()) {
            result.duplicates.insert(key.to_string());
        }
    }
    result
}

pub fn glossary_keys(entries: &[GlossaryEntry]) -> DeclaredKeys {
    declared(entries.iter().map(|e| e.key.as_str()))
}

pub fn bibliography_keys(entries: &[BibEntry]) -> DeclaredKeys {
    declared(entries.iter().map(|e| e.key.as_str()))
}

/// Keys referenced from glossary definitions.
pub fn glossary_references(entries: &[GlossaryEntry]) -> BTreeSet<String> {
    entries
        .iter()
        .filter_map(|e| e.def.as_deref())
        .flat_map(|def| match_text(&GLOSS_DEF_REF, def, false).keys)
        .collect()
}
