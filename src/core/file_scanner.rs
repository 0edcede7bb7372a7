use std::{collections::BTreeSet, path::Path};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning a chapter directory.
pub struct ScanResult {
    /// Paths relative to the scanned directory, `/`-separated.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// List every file under `dir` except those matching an ignore pattern.
///
/// Patterns are matched against the path relative to `dir`; invalid patterns
/// are skipped with a warning in verbose mode.
pub fn scan_chapter_files(dir: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if patterns.iter().any(|p| p.matches(&relative)) {
            continue;
        }

        files.insert(relative);
    }

    ScanResult {
        files,
        skipped_count,
    }
}
