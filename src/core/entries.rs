//! Chapter and appendix entries derived from the book configuration.
//!
//! The book's `config.yml` holds an ordered `chapters` list. Entries before
//! the first one carrying an `appendix` key are chapters numbered `1, 2, …`;
//! that entry and everything after it are appendices lettered `A, B, …`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

/// The parts of `config.yml` the checks rely on.
#[derive(Debug, Clone, Deserialize)]
pub struct BookConfig {
    pub chapters: Vec<ChapterEntry>,
}

/// One item of the `chapters` list as written in the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterEntry {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub file: Option<String>,
    /// True when the entry has an `appendix` key, whatever its value.
    #[serde(default, deserialize_with = "key_present")]
    pub appendix: bool,
}

fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer).map(|_| true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    Chapter,
    Appendix,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Chapter => write!(f, "Chapter"),
            EntryKind::Appendix => write!(f, "Appendix"),
        }
    }
}

/// A chapter or appendix with its derived file path and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub slug: String,
    pub title: String,
    pub file: String,
    pub kind: EntryKind,
    pub label: String,
}

/// Default source file for an entry without an explicit `file`.
pub fn default_entry_file(slug: &str) -> String {
    format!("./{}/index.md", slug)
}

/// Derive the ordered entry list.
pub fn derive_entries(config: &BookConfig) -> Vec<Entry> {
    let mut first_appendix: Option<usize> = None;

    config
        .chapters
        .iter()
        .enumerate()
        .map(|(i, chapter)| {
            if chapter.appendix && first_appendix.is_none() {
                first_appendix = Some(i);
            }
            let (kind, label) = match first_appendix {
                None => (EntryKind::Chapter, (i + 1).to_string()),
                Some(start) => (EntryKind::Appendix, appendix_label(i - start)),
            };
            Entry {
                slug: chapter.slug.clone(),
                title: chapter.title.clone(),
                file: chapter
                    .file
                    .clone()
                    .unwrap_or_else(|| default_entry_file(&chapter.slug)),
                kind,
                label,
            }
        })
        .collect()
}

/// `0 -> "A"`, `25 -> "Z"`, `26 -> "AA"`.
fn appendix_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}
