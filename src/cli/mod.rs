pub mod args;
pub mod commands;
pub mod exit_status;
pub mod options;
pub mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(ExitStatus::from(&result))
}
