//! Extraction patterns for book markup.

use std::sync::LazyLock;

use regex::Regex;

use super::matcher::KeyPattern;

fn key_pattern(pattern: &str) -> KeyPattern {
    KeyPattern::new(Regex::new(pattern).unwrap(), 1)
}

/// Glossary references: `<span g="key1,key2">term</span>`.
pub static GLOSS_REF: LazyLock<KeyPattern> =
    LazyLock::new(|| key_pattern(r#"(?s)<span\s+g="(.+?)">"#));

/// Glossary cross-references inside definitions: `[term](#key)`.
pub static GLOSS_DEF_REF: LazyLock<KeyPattern> =
    LazyLock::new(|| key_pattern(r"\]\(#([^)\s]+)\)"));

/// Section cross-references: `<a section="slug"/>`.
pub static SECTION_REF: LazyLock<KeyPattern> =
    LazyLock::new(|| key_pattern(r#"<a\s+section="([^"]+)"\s*/?>"#));

/// Citations: `<cite>key1,key2</cite>`.
pub static CITATION: LazyLock<KeyPattern> =
    LazyLock::new(|| key_pattern(r"(?s)<cite>(.+?)</cite>"));

/// Included files: `{% include file="name.py" %}` (other attributes allowed).
pub static INCLUSION: LazyLock<KeyPattern> = LazyLock::new(|| {
    key_pattern(r#"(?s)\{%\s+include\s+[^%]*?\bfile="([^"]+)"[^%]*?%\}"#)
});
