use std::path::Path;

use anyhow::Context;
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Write each entry followed by a newline, creating or truncating `path`.
pub async fn write_lines(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    let f = fs::File::create(path)
        .await
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    for line in lines {
        w.write_all(line.as_bytes()).await?;
        w.write_all(b"\n").await?;
    }
    w.flush().await.with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Read `path` as newline-delimited text, keeping every line in order.
/// Invalid UTF-8 is replaced rather than rejected.
pub async fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).lines().map(|l| l.to_string()).collect())
}
