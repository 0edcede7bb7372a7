//! Report formatting and printing utilities.
//!
//! Set differences and size problems are plain nested lists on stdout; key
//! warnings and the closing summary go to stderr. Separate from core logic to
//! allow bookcheck to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::PooledMatches;
use crate::issues::{Issue, Report, Rule, Severity};
use crate::utils::count_noun;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues to stdout and warnings to stderr.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print issues to custom writers.
///
/// `issues` are expected to be sorted, so problems of one rule are adjacent.
pub fn report_to<W: Write, E: Write>(issues: &[Issue], out: &mut W, err: &mut E) {
    let mut current_group: Option<Rule> = None;

    for issue in issues {
        match issue {
            Issue::KeyMismatch(mismatch) => {
                let _ = write!(out, "{}", mismatch.difference);
            }
            Issue::DuplicateKey(_) => {
                let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), issue.message());
            }
            Issue::LongLine(_) | Issue::LongChunk(_) => {
                let rule = issue.rule();
                if current_group != Some(rule) {
                    let _ = writeln!(out, "- {}", group_title(issue));
                    current_group = Some(rule);
                }
                let _ = writeln!(out, "  - {}", issue.message());
            }
        }
    }
}

fn group_title(issue: &Issue) -> String {
    match issue {
        Issue::LongLine(long_line) => format!("Lines wider than {}", long_line.limit),
        Issue::LongChunk(long_chunk) => format!("Chunks longer than {}", long_chunk.limit),
        _ => issue.rule().to_string(),
    }
}

/// Print the closing summary line.
pub fn print_summary_to<W: Write>(issues: &[Issue], entries: usize, writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    if issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} - no issues found",
                count_noun(entries, "entry", "entries")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            count_noun(issues.len(), "problem", "problems"),
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// Print matched keys one per line, after any duplicate warnings.
pub fn print_matches_to<W: Write, E: Write>(pooled: &PooledMatches, out: &mut W, err: &mut E) {
    pooled.warn_duplicates_to(err);
    for key in &pooled.keys {
        let _ = writeln!(out, "{}", key);
    }
}

pub fn print(result: &CommandResult) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match &result.summary {
        CommandSummary::Check { entries } => {
            report_to(&result.issues, &mut out, &mut err);
            print_summary_to(&result.issues, *entries, &mut err);
        }
        CommandSummary::Entries { rendered } => {
            let _ = write!(out, "{}", rendered);
        }
        CommandSummary::EntriesWritten { path, count } => {
            let _ = writeln!(
                err,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote {} to {}",
                    count_noun(*count, "entry", "entries"),
                    path.display()
                )
                .green()
            );
        }
        CommandSummary::Matches(pooled) => {
            print_matches_to(pooled, &mut out, &mut err);
        }
        CommandSummary::Words { words } => {
            for word in words {
                let _ = writeln!(out, "{}", word);
            }
            report_to(&result.issues, &mut out, &mut err);
        }
        CommandSummary::Init(summary) => {
            print_init_to(summary, &mut out, &mut err);
        }
    }
}

fn print_init_to<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if let Some(error) = &summary.error {
        let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
    } else if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
