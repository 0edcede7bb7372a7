//! Core extraction engine.
//!
//! - `scrub`: ordered text substitutions that strip markup before matching
//! - `matcher`: capture-group key extraction, per file and pooled
//! - `entries`: chapter/appendix entries derived from the book configuration
//! - `difference`: two-set comparison and its nested-list rendering
//! - `patterns`: extraction patterns for book markup
//! - `book`: glossary and bibliography documents
//! - `context`: configuration, entries and paths shared by every check

pub mod book;
pub mod context;
pub mod difference;
pub mod entries;
pub mod file_scanner;
pub mod matcher;
pub mod parsers;
pub mod patterns;
pub mod scrub;
#[cfg(feature = "words")]
pub mod words;

pub use context::CheckContext;
pub use difference::{NamedSet, SetDifference, report_difference, report_difference_to};
pub use entries::{BookConfig, ChapterEntry, Entry, EntryKind, derive_entries};
pub use matcher::{
    DuplicateKeys, FileMatches, KeyPattern, PooledMatches, match_file, match_files, match_text,
};
pub use scrub::{ScrubRule, ScrubRules};
