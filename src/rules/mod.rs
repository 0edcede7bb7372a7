//! Rule implementations for bookcheck.
//!
//! Each rule module has a pure function that compares already extracted key
//! sets, plus a `check_*_issues` wrapper that extracts those sets from the
//! book described by a [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `helpers`: Shared helpers (mismatch construction, chapter inclusions)
//! - `glossary`: Glossary terms declared vs. referenced
//! - `crossref`: Section cross-references vs. chapter slugs
//! - `citations`: Bibliography keys vs. citations
//! - `inclusions`: Files in chapter directories vs. included files
//! - `chunks`: Width and length of included files
//! - `spelling`: Words not found in a dictionary (feature `words`)

pub mod chunks;
pub mod citations;
pub mod crossref;
pub mod glossary;
pub mod helpers;
pub mod inclusions;
#[cfg(feature = "words")]
pub mod spelling;
