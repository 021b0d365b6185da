use std::path::Path;

use anyhow::Context;

use crate::external::{CommandRunner, OutputMode, ScratchDir, ToolPaths};
use crate::utils;

const INPUT_NAME: &str = "input";
const LIVE_NAME: &str = "live";

/// Hand every candidate to httpx and return the hosts it reports live, in
/// httpx's own output order. When `save_to` is set the live hosts are also
/// written there, replacing any previous contents.
pub async fn probe_subdomains<R: CommandRunner + ?Sized>(
    runner: &R,
    tools: &ToolPaths,
    candidates: &[String],
    save_to: Option<&Path>,
) -> anyhow::Result<Vec<String>> {
    let scratch = ScratchDir::new("httpx-input-")?;
    let input = scratch.write_lines(INPUT_NAME, candidates).await?;
    let live_path = scratch.path(LIVE_NAME);

    let cmd = tools.httpx(&input, &live_path);
    runner.run(&cmd, OutputMode::Discard).await.context("httpx command failed")?;

    let live = utils::read_lines(&live_path).await.context("failed to read httpx results")?;
    tracing::debug!(candidates = candidates.len(), live = live.len(), "httpx finished");

    if let Some(path) = save_to {
        utils::write_lines(path, &live)
            .await
            .with_context(|| format!("error writing subdomains file {}", path.display()))?;
        tracing::info!(path = %path.display(), count = live.len(), "live subdomains saved");
    }

    Ok(live)
}
