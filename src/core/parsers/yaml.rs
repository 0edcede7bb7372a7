use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};

/// Load a YAML document into `T`.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read YAML file: {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML file: {}", path.display()))
}

/// Serialize `data` as YAML into `path`, replacing any existing file.
pub fn write_yaml<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_yaml::to_string(data)
        .with_context(|| format!("Failed to serialize YAML for: {}", path.display()))?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write YAML file: {}", path.display()))
}
