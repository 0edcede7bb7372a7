//! Issue types for book checks.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it. Key-set mismatches carry the full [`SetDifference`] so they are
//! printed as the nested list authors know from the check scripts.

use std::collections::BTreeSet;

use enum_dispatch::enum_dispatch;

use crate::core::SetDifference;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Glossary,
    CrossReference,
    Citation,
    Inclusion,
    LineWidth,
    ChunkLength,
    Spelling,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Glossary => write!(f, "gloss"),
            Rule::CrossReference => write!(f, "xref"),
            Rule::Citation => write!(f, "cite"),
            Rule::Inclusion => write!(f, "include"),
            Rule::LineWidth => write!(f, "line-width"),
            Rule::ChunkLength => write!(f, "chunk-length"),
            Rule::Spelling => write!(f, "spelling"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Two key sets that disagree (declared vs. used, present vs. included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMismatchIssue {
    pub rule: Rule,
    pub difference: SetDifference,
}

impl KeyMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }
}

/// Keys that occur more than once in a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub rule: Rule,
    pub file_path: String,
    pub keys: BTreeSet<String>,
}

impl DuplicateKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }
}

/// Included line wider than the configured width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongLineIssue {
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// Display width in columns.
    pub width: usize,
    pub limit: usize,
}

impl LongLineIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::LineWidth
    }
}

/// Included file longer than the configured chunk length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongChunkIssue {
    pub file_path: String,
    pub lines: usize,
    pub limit: usize,
}

impl LongChunkIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ChunkLength
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found by a book check.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    KeyMismatch(KeyMismatchIssue),
    DuplicateKey(DuplicateKeyIssue),
    LongLine(LongLineIssue),
    LongChunk(LongChunkIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    fn sort_line(&self) -> usize {
        match self {
            Issue::LongLine(issue) => issue.line,
            _ => 0,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// One-line description of the issue.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// File the issue belongs to, if it belongs to one.
    fn file_path(&self) -> Option<&str> {
        None
    }
}

impl Report for KeyMismatchIssue {
    fn message(&self) -> String {
        let difference = &self.difference;
        let mut parts = Vec::new();
        if !difference.only_left.is_empty() {
            parts.push(format!(
                "{} in {} but not {}",
                difference.only_left.len(),
                difference.left_name,
                difference.right_name
            ));
        }
        if !difference.only_right.is_empty() {
            parts.push(format!(
                "{} in {} but not {}",
                difference.only_right.len(),
                difference.right_name,
                difference.left_name
            ));
        }
        format!("{}: {}", difference.title, parts.join(", "))
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule
    }
}

impl Report for DuplicateKeyIssue {
    fn message(&self) -> String {
        let keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        format!("duplicate key(s) in {}: {}", self.file_path, keys.join(", "))
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule
    }

    fn file_path(&self) -> Option<&str> {
        Some(&self.file_path)
    }
}

impl Report for LongLineIssue {
    fn message(&self) -> String {
        format!("{}:{} ({})", self.file_path, self.line, self.width)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn file_path(&self) -> Option<&str> {
        Some(&self.file_path)
    }
}

impl Report for LongChunkIssue {
    fn message(&self) -> String {
        format!("{} ({})", self.file_path, self.lines)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn file_path(&self) -> Option<&str> {
        Some(&self.file_path)
    }
}

// ============================================================
// Ordering
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: rule, file_path (None first), line, message
        self.rule()
            .cmp(&other.rule())
            .then_with(|| self.file_path().cmp(&other.file_path()))
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
