use std::path::Path;

use anyhow::Context;

use crate::external::{CommandRunner, OutputMode, ScratchDir, ToolPaths};

/// Clusterbomb the live hosts (FUZZ1) against the `fuzz2` wordlist (FUZZ2).
/// ffuf's console output streams straight through; with `output` set ffuf
/// also writes its matches there. Results are never parsed here.
pub async fn run_ffuf<R: CommandRunner + ?Sized>(
    runner: &R,
    tools: &ToolPaths,
    live: &[String],
    fuzz2: &Path,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let scratch = ScratchDir::new("fuzz1-")?;
    let fuzz1 = scratch.write_lines("fuzz1", live).await?;

    let cmd = tools.ffuf(&fuzz1, fuzz2, output);
    println!("Running ffuf clusterbomb fuzzing...");
    runner.run(&cmd, OutputMode::Inherit).await.context("error running ffuf")?;
    Ok(())
}
