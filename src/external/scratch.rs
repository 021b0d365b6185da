use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::TempDir;

/// Temporary directory holding the files an external tool wants by path.
/// Everything inside is removed when this is dropped, whichever way the
/// owning stage exits.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new(prefix: &str) -> anyhow::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .with_context(|| format!("failed to create temporary directory ({})", prefix))?;
        tracing::debug!(path = %dir.path().display(), "scratch directory created");
        Ok(Self { dir })
    }

    #[cfg(test)]
    fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the scratch directory; the file need not exist.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `lines` to `name`, one entry per line, and return its path.
    pub async fn write_lines(&self, name: &str, lines: &[String]) -> anyhow::Result<PathBuf> {
        let path = self.path(name);
        crate::utils::write_lines(&path, lines).await?;
        Ok(path)
    }
}
