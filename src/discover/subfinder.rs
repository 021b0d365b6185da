use std::path::Path;

use anyhow::Context;

use crate::external::{CommandRunner, OutputMode, ToolPaths};

/// Read the root-domain list: one per line, trailing whitespace and CR
/// trimmed, blank lines skipped, file order kept. Invalid UTF-8 is replaced
/// rather than rejected.
pub async fn read_domains(path: &Path) -> anyhow::Result<Vec<String>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read domains file {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect())
}

/// Run subfinder once per domain, in order, collecting each run's raw stdout
/// as one entry. Entries are not split; an entry usually spans several lines.
pub async fn find_subdomains<R: CommandRunner + ?Sized>(
    runner: &R,
    tools: &ToolPaths,
    domains: &[String],
) -> anyhow::Result<Vec<String>> {
    let mut subdomains = Vec::with_capacity(domains.len());
    for domain in domains {
        println!("Running subfinder for domain: {}", domain);
        let cmd = tools.subfinder(domain);
        let output = runner
            .run(&cmd, OutputMode::Capture)
            .await
            .with_context(|| format!("subfinder failed for {}", domain))?;
        tracing::debug!(domain = %domain, bytes = output.len(), "subfinder finished");
        subdomains.push(output);
    }
    Ok(subdomains)
}
