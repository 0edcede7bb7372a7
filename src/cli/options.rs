//! Declarative option lists for small check scripts.
//!
//! A script lists its options as `(flag, arity, help)` triples and gets back
//! a clap parser, without writing a derive struct:
//!
//! ```
//! use bookcheck::cli::options::{Arity, OptionSpec, parse_options_from};
//!
//! let specs = [
//!     OptionSpec::new("--config", Arity::Single, "book configuration"),
//!     OptionSpec::new("--sources", Arity::Multiple, "source files"),
//!     OptionSpec::new("--verbose", Arity::Flag, "report progress"),
//! ];
//! let options = parse_options_from(
//!     "check-gloss",
//!     &specs,
//!     ["check-gloss", "--config", "config.yml", "--sources", "a.md", "b.md"],
//! )
//! .unwrap();
//!
//! assert_eq!(options.value("--config"), Some("config.yml"));
//! assert_eq!(options.values("sources"), vec!["a.md", "b.md"]);
//! assert!(!options.flag("verbose"));
//! ```

use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

/// How many values an option takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No value; present or absent.
    Flag,
    /// Exactly one value.
    Single,
    /// One or more values.
    Multiple,
}

#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub flag: &'static str,
    pub arity: Arity,
    pub help: &'static str,
}

impl OptionSpec {
    pub const fn new(flag: &'static str, arity: Arity, help: &'static str) -> Self {
        Self { flag, arity, help }
    }

    /// Option name without leading dashes.
    pub fn name(&self) -> &'static str {
        option_name(self.flag)
    }

    fn to_arg(self) -> Arg {
        let name = self.name();
        let arg = Arg::new(name).long(name).help(self.help);
        match self.arity {
            Arity::Flag => arg.action(ArgAction::SetTrue),
            Arity::Single => arg.action(ArgAction::Set).num_args(1),
            Arity::Multiple => arg.action(ArgAction::Append).num_args(1..),
        }
    }
}

fn option_name(flag: &str) -> &str {
    flag.trim_start_matches('-')
}

/// Build a clap command accepting the given options.
pub fn build_command(name: &'static str, specs: &[OptionSpec]) -> Command {
    specs
        .iter()
        .fold(Command::new(name), |command, spec| command.arg(spec.to_arg()))
}

/// Parse `args` (including the program name) against `specs`.
pub fn parse_options_from<I, T>(name: &'static str, specs: &[OptionSpec], args: I) -> Result<ParsedOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command(name, specs)
        .try_get_matches_from(args)
        .with_context(|| format!("Invalid arguments for {}", name))?;
    Ok(ParsedOptions { matches })
}

/// Parsed option values, looked up by flag (with or without dashes).
#[derive(Debug)]
pub struct ParsedOptions {
    matches: ArgMatches,
}

impl ParsedOptions {
    /// Whether a `Flag` option was given. False for unknown names.
    pub fn flag(&self, flag: &str) -> bool {
        self.matches
            .try_get_one::<bool>(option_name(flag))
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    }

    /// Value of a `Single` option.
    pub fn value(&self, flag: &str) -> Option<&str> {
        self.matches
            .try_get_one::<String>(option_name(flag))
            .ok()
            .flatten()
            .map(String::as_str)
    }

    /// Values of a `Multiple` option, in command-line order.
    pub fn values(&self, flag: &str) -> Vec<&str> {
        self.matches
            .try_get_many::<String>(option_name(flag))
            .ok()
            .flatten()
            .map(|values| values.map(String::as_str).collect())
            .unwrap_or_default()
    }
}
