use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): no error-severity issues
/// - `Failure` (1): the book has errors (mismatched keys, long chunks, ...)
/// - `Error` (2): the command could not run (unreadable file, bad config, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
