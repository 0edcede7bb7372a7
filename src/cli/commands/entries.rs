use std::{fs, path::Path};

use anyhow::{Context, Ok, Result};

use super::super::args::{EntriesCommand, OutputFormat};
use super::{CommandResult, CommandSummary, helper::finish};
use crate::core::{CheckContext, Entry, parsers::yaml::write_yaml};

pub fn entries(cmd: EntriesCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let summary = match cmd.output {
        Some(path) => {
            write_entries(&ctx.entries, cmd.format, &path)?;
            CommandSummary::EntriesWritten {
                path,
                count: ctx.entries.len(),
            }
        }
        None => CommandSummary::Entries {
            rendered: render_entries(&ctx.entries, cmd.format)?,
        },
    };
    Ok(finish(summary, Vec::new(), false))
}

/// Render entries as tab-separated lines, a JSON array or a YAML list.
pub fn render_entries(entries: &[Entry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|entry| {
                format!(
                    "{}\t{}\t{}\t{}\n",
                    entry.label, entry.slug, entry.title, entry.file
                )
            })
            .collect()),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(entries).context("Failed to serialize entries")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => serde_yaml::to_string(entries).context("Failed to serialize entries"),
    }
}

/// Write entries to `path` in the given format.
pub fn write_entries(entries: &[Entry], format: OutputFormat, path: &Path) -> Result<()> {
    match format {
        OutputFormat::Yaml => write_yaml(path, &entries),
        OutputFormat::Text | OutputFormat::Json => {
            let rendered = render_entries(entries, format)?;
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write entries: {}", path.display()))
        }
    }
}
