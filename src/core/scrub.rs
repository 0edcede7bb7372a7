//! Text scrubbing.
//!
//! Book sources mix prose with markup that pollutes pattern matching:
//! code blocks, `{% raw %}` sections, callout wrappers, inclusion directives
//! and so on. Scrubbing replaces each of those constructs with a single space
//! so that later matching only sees prose and the markers we care about.
//!
//! Rules live in an explicit, ordered [`ScrubRules`] value. The standard set
//! is shared through [`ScrubRules::standard`], but callers can build their own.

use std::{borrow::Cow, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};

/// What a rule puts in place of its match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// A single space, so neighbouring words never fuse.
    Space,
    /// The text of the first capture group (visible text of a link).
    FirstGroup,
}

/// A single named substitution.
#[derive(Debug, Clone)]
pub struct ScrubRule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl ScrubRule {
    /// Rule replacing every match with a single space.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        Self::build(name, pattern, Replacement::Space)
    }

    /// Rule replacing every match with its first capture group.
    pub fn keeping_text(name: &'static str, pattern: &str) -> Result<Self> {
        Self::build(name, pattern, Replacement::FirstGroup)
    }

    fn build(name: &'static str, pattern: &str, replacement: Replacement) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid scrub pattern '{}': {}", name, pattern))?;
        Ok(Self {
            name,
            pattern,
            replacement,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn replacement(&self) -> Replacement {
        self.replacement
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Space => self.pattern.replace_all(text, NoExpand(" ")),
            Replacement::FirstGroup => self.pattern.replace_all(text, "${1}"),
        }
    }
}

// (name, pattern) tables for the standard rule set. Order matters.
const ALWAYS: &[(&str, &str)] = &[
    ("em-dash", r"---"),
    ("special-characters", r"[©×μ…]"),
    ("code-block", r"(?s)```.+?```"),
    ("inline-code", r"(?s)`.+?`"),
    ("raw-block", r"(?s)\{%\s+raw\s+%\}.*?\{%\s+endraw\s+%\}"),
    ("callout-open", r#"<div\s+class="callout"\s*markdown="1">"#),
    ("callout-close", r"</div>"),
];

const CONDITIONAL: &[(&str, &str)] = &[
    ("inclusion", r"(?s)\{%\s+include\s+.+?%\}"),
    ("continuation", r"(?s)\{:\s+\.continue\s*\}"),
];

const SPANS: &[(&str, &str)] = &[
    ("span-open", r"(?s)<span\b.+?>"),
    ("span-close", r"</span>"),
    ("citation", r"(?s)<cite>.+?</cite>"),
];

const LINKS: &[(&str, &str)] = &[
    ("reference-link", r"\[([^\]]+)\]\[[^\]]*\]"),
    ("inline-link", r"\[([^\]]+)\]\([^)]+\)"),
];

static STANDARD: LazyLock<ScrubRules> = LazyLock::new(|| {
    let compile = |table: &[(&'static str, &str)], keep_text: bool| -> Vec<ScrubRule> {
        table
            .iter()
            .map(|&(name, pattern)| {
                let rule = if keep_text {
                    ScrubRule::keeping_text(name, pattern)
                } else {
                    ScrubRule::new(name, pattern)
                };
                rule.unwrap()
            })
            .collect()
    };
    ScrubRules::new(
        compile(ALWAYS, false),
        compile(CONDITIONAL, false),
        compile(SPANS, false),
        compile(LINKS, true),
    )
});

/// Ordered, immutable set of scrub rules.
#[derive(Debug, Clone)]
pub struct ScrubRules {
    always: Vec<ScrubRule>,
    conditional: Vec<ScrubRule>,
    spans: Vec<ScrubRule>,
    links: Vec<ScrubRule>,
}

impl ScrubRules {
    pub fn new(
        always: Vec<ScrubRule>,
        conditional: Vec<ScrubRule>,
        spans: Vec<ScrubRule>,
        links: Vec<ScrubRule>,
    ) -> Self {
        Self {
            always,
            conditional,
            spans,
            links,
        }
    }

    /// The rule set used by every book check.
    pub fn standard() -> &'static ScrubRules {
        &STANDARD
    }

    /// Rules applied to every file (structural noise).
    pub fn always(&self) -> &[ScrubRule] {
        &self.always
    }

    /// Rules applied only when scrubbing is requested (inclusions, continuations).
    pub fn conditional(&self) -> &[ScrubRule] {
        &self.conditional
    }

    /// Span rules used during word extraction.
    pub fn spans(&self) -> &[ScrubRule] {
        &self.spans
    }

    /// Link rules used during word extraction.
    pub fn links(&self) -> &[ScrubRule] {
        &self.links
    }

    /// Normalize `text` for pattern matching.
    ///
    /// `always` rules run first; `conditional` rules run afterwards and only
    /// when `scrub` is set. Malformed or absent markup is left untouched.
    ///
    /// Removing one construct can complete another (`{%</div>raw %}`), so the
    /// passes repeat until the text no longer changes.
    pub fn scrub(&self, text: &str, scrub: bool) -> String {
        let mut text = text.to_string();
        loop {
            let mut next = apply_all(&self.always, text.clone());
            if scrub {
                next = apply_all(&self.conditional, next);
            }
            if next == text {
                return text;
            }
            text = next;
        }
    }

    /// Replace reference spans and citations with a single space.
    pub fn strip_spans(&self, text: &str) -> String {
        apply_all(&self.spans, text.to_string())
    }

    /// Replace links with their visible text.
    pub fn keep_link_text(&self, text: &str) -> String {
        apply_all(&self.links, text.to_string())
    }

    /// Read a file and scrub its content.
    pub fn read_file(&self, path: &Path, scrub: bool) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(self.scrub(&content, scrub))
    }
}

fn apply_all(rules: &[ScrubRule], mut text: String) -> String {
    for rule in rules {
        let replaced = match rule.apply(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(replaced) => Some(replaced),
        };
        if let Some(replaced) = replaced {
            text = replaced;
        }
    }
    text
}

/// Scrub `text` with the standard rule set.
pub fn scrub(text: &str, scrub: bool) -> String {
    ScrubRules::standard().scrub(text, scrub)
}

/// Read and scrub a file with the standard rule set.
pub fn read_file(path: &Path, scrub: bool) -> Result<String> {
    ScrubRules::standard().read_file(path, scrub)
}
