//! Bookcheck - consistency checker for Markdown books
//!
//! Bookcheck is a CLI tool and library for validating a book written as
//! Markdown files with template directives. It extracts keys (glossary
//! references, citations, cross-references, included files) from scrubbed
//! source text and reports how they differ from what the book declares.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report printing)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scrubbing, key matching, entry derivation and set differences
//! - `issues`: Issue type definitions and reporting
//! - `rules`: One check per book consistency rule
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
