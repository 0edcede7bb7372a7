//! Included-chunk size rule.
//!
//! Included files end up verbatim on the page, so their lines must fit the
//! page width and the files themselves must stay short.

use std::fs;

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthStr;

use super::helpers::ChapterInclusions;
use crate::{
    core::CheckContext,
    issues::{Issue, LongChunkIssue, LongLineIssue},
};

pub fn check_chunk_issues(ctx: &CheckContext, chapters: &[ChapterInclusions]) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();
    for chapter in chapters {
        for name in &chapter.includes {
            let path = chapter.dir.join(name);
            // Missing files are reported by the inclusion rule.
            if !path.is_file() {
                continue;
            }
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read included file: {}", path.display()))?;
            issues.extend(check_chunk(
                &ctx.display_path(&path),
                &content,
                ctx.config.line_width,
                ctx.config.chunk_length,
            ));
        }
    }
    Ok(issues)
}

/// Check one included file against the width and length limits.
pub fn check_chunk(
    file_path: &str,
    content: &str,
    line_width: usize,
    chunk_length: usize,
) -> Vec<Issue> {
    let mut issues: Vec<Issue> = content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let width = UnicodeWidthStr::width(line);
            (width > line_width).then(|| {
                Issue::LongLine(LongLineIssue {
                    file_path: file_path.to_string(),
                    line: i + 1,
                    width,
                    limit: line_width,
                })
            })
        })
        .collect();

    let lines = content.lines().count();
    if lines > chunk_length {
        issues.push(Issue::LongChunk(LongChunkIssue {
            file_path: file_path.to_string(),
            lines,
            limit: chunk_length,
        }));
    }

    issues
}
