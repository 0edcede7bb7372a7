use std::{
    cell::OnceCell,
    path::{Component, Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        book::{BibEntry, GlossaryEntry},
        entries::{BookConfig, Entry, derive_entries},
        parsers::yaml::read_yaml,
    },
};

/// Everything a book check needs: configuration, entries and file locations.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--glossary terms.yml`)
/// 2. `.bookcheck.json` config file
/// 3. Built-in defaults
///
/// The glossary and bibliography are only read by the checks that need them,
/// so a book without a bibliography can still run `check gloss`.
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Book root directory; entry files are relative to it.
    pub root_dir: PathBuf,

    /// Chapters and appendices in configuration order.
    pub entries: Vec<Entry>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// `root_dir` joined with each entry's file.
    entry_paths: OnceCell<Vec<PathBuf>>,
}

impl CheckContext {
    /// Load configuration and derive the entry list.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `.bookcheck.json` is invalid
    /// - the book configuration cannot be read or lacks required keys
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        let mut config = config_result.config;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} no config file found, using defaults",
                "note:".bold().cyan()
            );
        }

        if let Some(book_config) = &common_args.config {
            config.book_config = book_config.to_string_lossy().into_owned();
        }
        if let Some(glossary) = &common_args.glossary {
            config.glossary = glossary.to_string_lossy().into_owned();
        }
        if let Some(bibliography) = &common_args.bibliography {
            config.bibliography = bibliography.to_string_lossy().into_owned();
        }

        let book: BookConfig = read_yaml(&root_dir.join(&config.book_config))?;
        let entries = derive_entries(&book);
        if verbose {
            eprintln!(
                "{} {} entries from {}",
                "note:".bold().cyan(),
                entries.len(),
                config.book_config
            );
        }

        Ok(Self::from_parts(config, root_dir, entries, verbose))
    }

    pub fn from_parts(config: Config, root_dir: PathBuf, entries: Vec<Entry>, verbose: bool) -> Self {
        Self {
            config,
            root_dir,
            entries,
            verbose,
            entry_paths: OnceCell::new(),
        }
    }

    /// Source file of every entry, in entry order.
    pub fn entry_paths(&self) -> &[PathBuf] {
        self.entry_paths.get_or_init(|| {
            self.entries
                .iter()
                .map(|entry| self.root_dir.join(&entry.file))
                .collect()
        })
    }

    /// Directory owned by an entry, or `None` when its file sits directly in
    /// the book root (the root is shared by every entry).
    pub fn chapter_dir(&self, path: &Path) -> Option<PathBuf> {
        let parent = path.parent()?;
        if same_dir(parent, &self.root_dir) {
            None
        } else {
            Some(parent.to_path_buf())
        }
    }

    pub fn glossary_path(&self) -> PathBuf {
        self.root_dir.join(&self.config.glossary)
    }

    pub fn bibliography_path(&self) -> PathBuf {
        self.root_dir.join(&self.config.bibliography)
    }

    pub fn load_glossary(&self) -> Result<Vec<GlossaryEntry>> {
        read_yaml(&self.glossary_path())
    }

    pub fn load_bibliography(&self) -> Result<Vec<BibEntry>> {
        read_yaml(&self.bibliography_path())
    }

    /// Path for display, relative to the book root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root_dir) {
            Ok(relative) => relative
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => path.display().to_string(),
        }
    }

    pub fn note(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "note:".bold().cyan(), message);
        }
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    let normalize = |p: &Path| -> PathBuf {
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    };
    normalize(a) == normalize(b)
}
