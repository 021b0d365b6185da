use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::external::ToolPaths;

/// Optional JSON config; every field falls back to its default.
///
/// ```json
/// { "tools": { "subfinder": "/opt/pd/subfinder", "ffuf": "ffuf" } }
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolPaths,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    /// `Config::load` when a path is given, defaults otherwise.
    pub fn from_optional(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
