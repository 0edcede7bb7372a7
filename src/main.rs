use std::process::ExitCode;

use bookcheck::cli::{Arguments, ExitStatus};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match bookcheck::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
