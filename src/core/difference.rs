//! Set-difference reporting.
//!
//! Compares two named key sets and renders what each side lacks as a nested
//! Markdown-style list:
//!
//! ```text
//! - Glossary
//!   - glossary but not text
//!     - unused-term
//!   - text but not glossary
//!     - undefined-term
//! ```

use std::{
    collections::BTreeSet,
    fmt,
    io::{self, Write},
};

/// A key set with the name it is reported under.
#[derive(Debug, Clone, Copy)]
pub struct NamedSet<'a> {
    pub name: &'a str,
    pub keys: &'a BTreeSet<String>,
}

impl<'a> NamedSet<'a> {
    pub fn new(name: &'a str, keys: &'a BTreeSet<String>) -> Self {
        Self { name, keys }
    }
}

/// The reportable difference between two named sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDifference {
    pub title: String,
    pub left_name: String,
    pub right_name: String,
    /// Items only in the left set.
    pub only_left: BTreeSet<String>,
    /// Items only in the right set; always empty when right-only checking is off.
    pub only_right: BTreeSet<String>,
}

impl SetDifference {
    /// Compare `left` with `right`.
    ///
    /// Returns `None` when there is nothing to report: no left-only items and
    /// either no right-only items or `check_only_right` disabled.
    pub fn compute(
        title: &str,
        left: NamedSet<'_>,
        right: NamedSet<'_>,
        check_only_right: bool,
    ) -> Option<Self> {
        let only_left: BTreeSet<String> = left.keys.difference(right.keys).cloned().collect();
        let only_right: BTreeSet<String> = if check_only_right {
            right.keys.difference(left.keys).cloned().collect()
        } else {
            BTreeSet::new()
        };

        if only_left.is_empty() && only_right.is_empty() {
            return None;
        }

        Some(Self {
            title: title.to_string(),
            left_name: left.name.to_string(),
            right_name: right.name.to_string(),
            only_left,
            only_right,
        })
    }

    /// Total number of reported items.
    pub fn len(&self) -> usize {
        self.only_left.len() + self.only_right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for SetDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}", self.title)?;
        if !self.only_left.is_empty() {
            writeln!(f, "  - {} but not {}", self.left_name, self.right_name)?;
            for item in &self.only_left {
                writeln!(f, "    - {}", item)?;
            }
        }
        if !self.only_right.is_empty() {
            writeln!(f, "  - {} but not {}", self.right_name, self.left_name)?;
            for item in &self.only_right {
                writeln!(f, "    - {}", item)?;
            }
        }
        Ok(())
    }
}

/// Compare two named sets and write the report, if any, to `writer`.
///
/// Returns whether anything was written.
pub fn report_difference_to<W: Write>(
    title: &str,
    left: NamedSet<'_>,
    right: NamedSet<'_>,
    check_only_right: bool,
    writer: &mut W,
) -> io::Result<bool> {
    match SetDifference::compute(title, left, right, check_only_right) {
        Some(difference) => {
            write!(writer, "{}", difference)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Compare two named sets and print the report, if any, to stdout.
pub fn report_difference(
    title: &str,
    left: NamedSet<'_>,
    right: NamedSet<'_>,
    check_only_right: bool,
) -> io::Result<bool> {
    report_difference_to(
        title,
        left,
        right,
        check_only_right,
        &mut io::stdout().lock(),
    )
}
