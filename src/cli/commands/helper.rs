use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(summary: CommandSummary, mut issues: Vec<Issue>, exit_on_errors: bool) -> CommandResult {
    issues.sort();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
    }
}
