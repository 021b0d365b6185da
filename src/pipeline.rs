use std::path::PathBuf;

use anyhow::Context;

use crate::discover::{find_subdomains, read_domains};
use crate::external::{CommandRunner, ToolPaths};
use crate::fuzz::run_ffuf;
use crate::probe::probe_subdomains;

/// Inputs for one end-to-end run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Newline-delimited root domains.
    pub domains: PathBuf,
    /// Wordlist bound to FUZZ2.
    pub fuzz2: PathBuf,
    /// Where to save live subdomains, if anywhere.
    pub subdomains_out: Option<PathBuf>,
    /// Where ffuf writes its matches; console only when unset.
    pub output: Option<PathBuf>,
}

/// subfinder -> httpx -> ffuf, strictly in sequence. The first failure ends
/// the run and nothing collected so far is kept.
pub struct Pipeline<R> {
    runner: R,
    tools: ToolPaths,
}

impl<R: CommandRunner> Pipeline<R> {
    pub fn new(runner: R, tools: ToolPaths) -> Self {
        Self { runner, tools }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn run(&self, opts: &RunOptions) -> anyhow::Result<()> {
        let domains = read_domains(&opts.domains).await?;
        if domains.is_empty() {
            tracing::warn!(path = %opts.domains.display(), "domains file has no entries");
        }

        let subdomains = find_subdomains(&self.runner, &self.tools, &domains)
            .await
            .context("subfinder stage failed")?;
        tracing::info!(domains = domains.len(), entries = subdomains.len(), "enumeration complete");

        let save_to = opts.subdomains_out.as_deref();
        let live = probe_subdomains(&self.runner, &self.tools, &subdomains, save_to)
            .await
            .context("httpx stage failed")?;
        tracing::info!(live = live.len(), "probing complete");
        if live.is_empty() {
            tracing::warn!("httpx reported no live hosts");
        }

        run_ffuf(&self.runner, &self.tools, &live, &opts.fuzz2, opts.output.as_deref())
            .await
            .context("ffuf stage failed")?;
        tracing::info!("fuzzing complete");
        Ok(())
    }
}
