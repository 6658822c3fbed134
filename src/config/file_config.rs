use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    pub db_path: Option<String>,
    /// First month of the dashboard range, `YYYY-MM`.
    pub start_month: Option<String>,
    /// Last month of the dashboard range, `YYYY-MM`.
    pub end_month: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
