use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".bookcheck.json";

/// Width of included lines, in display columns.
pub const DEFAULT_LINE_WIDTH: usize = 72;

/// Length of included chunks, in lines.
pub const DEFAULT_CHUNK_LENGTH: usize = 30;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Book configuration holding the `chapters` list.
    #[serde(default = "default_book_config")]
    pub book_config: String,
    #[serde(default = "default_glossary")]
    pub glossary: String,
    #[serde(default = "default_bibliography", alias = "bib")]
    pub bibliography: String,
    /// Chapter-directory files that are never expected to be included.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_line_width")]
    pub line_width: usize,
    #[serde(default = "default_chunk_length")]
    pub chunk_length: usize,
    /// Word list for spell-checking, one word per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<String>,
}

fn default_book_config() -> String {
    "config.yml".to_string()
}

fn default_glossary() -> String {
    "glossary.yml".to_string()
}

fn default_bibliography() -> String {
    "bibliography.yml".to_string()
}

fn default_ignores() -> Vec<String> {
    ["index.md", "*.svg", "*.png", "*.jpg", "*.pdf"]
        .map(String::from)
        .to_vec()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_chunk_length() -> usize {
    DEFAULT_CHUNK_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_config: default_book_config(),
            glossary: default_glossary(),
            bibliography: default_bibliography(),
            ignores: default_ignores(),
            line_width: default_line_width(),
            chunk_length: default_chunk_length(),
            dictionary: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or a limit is zero.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.line_width == 0 {
            bail!("'lineWidth' must be greater than 0");
        }
        if self.chunk_length == 0 {
            bail!("'chunkLength' must be greater than 0");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
