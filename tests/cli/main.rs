use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod entries;
mod init;
mod matches;
mod words;

const BIN_NAME: &str = "bookcheck";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop the config file search at the test directory.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A small book whose glossary, citations, cross-references and
    /// inclusions are all consistent.
    pub fn with_book() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "config.yml",
            r#"chapters:
  - title: Home
    slug: home
    file: index.md
  - title: Introduction
    slug: intro
  - title: Trees
    slug: trees
  - title: Bibliography
    slug: bib
    appendix: true
"#,
        )?;
        test.write_file(
            "index.md",
            "Welcome. Start with <a section=\"intro\"/>.\n",
        )?;
        test.write_file(
            "intro/index.md",
            r#"# Introduction

A <span g="graph">graph</span> has nodes <cite>Knuth1984</cite>.
See <a section="trees"/> for more.

{% include file="hello.py" %}
"#,
        )?;
        test.write_file("intro/hello.py", "print('hello')\n")?;
        test.write_file(
            "trees/index.md",
            r#"# Trees

A <span g="tree">tree</span> is a connected [graph](#graph) <cite>Knuth1984,Wirth1976</cite>.
"#,
        )?;
        test.write_file("bib/index.md", "# Bibliography\n")?;
        test.write_file(
            "glossary.yml",
            r#"- key: graph
  term: graph
  def: Nodes and edges.
- key: tree
  term: tree
  def: An acyclic [graph](#graph).
"#,
        )?;
        test.write_file(
            "bibliography.yml",
            "- key: Knuth1984\n- key: Wirth1976\n",
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Stdout, stderr and exit code of a finished command.
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        }
    }
}

pub fn run(mut cmd: Command) -> Result<CommandOutput> {
    let output = cmd.output().context("Failed to run bookcheck")?;
    Ok(output.into())
}
