use std::{fs, path::Path};

use anyhow::{Context, Ok, Result};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.bookcheck.json` into `dir`, refusing to overwrite one.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let summary = if config_path.exists() {
        InitSummary {
            created: false,
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        }
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        InitSummary {
            created: true,
            error: None,
        }
    };

    Ok(finish(CommandSummary::Init(summary), Vec::new(), true))
}
