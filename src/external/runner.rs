use std::fmt;
use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

/// A single external tool call: program plus its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Value following `flag`, if present.
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for a in &self.args {
            write!(f, " {}", a)?;
        }
        Ok(())
    }
}

/// Where the child's stdout/stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Pipe both streams; stdout is returned, stderr only surfaces on failure.
    Capture,
    /// Send both streams to null.
    Discard,
    /// Stream straight to our console.
    Inherit,
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{program} not found in PATH")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },
    #[error("failed to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{} exited with {}{}", .program, exit_label(.code), stderr_suffix(.stderr))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "a signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

/// Seam between the pipeline and the operating system's process table.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `cmd` to completion. Returns captured stdout in `Capture` mode,
    /// an empty string otherwise.
    async fn run(&self, cmd: &Invocation, mode: OutputMode) -> Result<String, ToolError>;
}

/// Spawns real child processes and waits for them. No timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, cmd: &Invocation, mode: OutputMode) -> Result<String, ToolError> {
        tracing::debug!(command = %cmd, ?mode, "spawning");

        let mut command = Command::new(&cmd.program);
        command.args(&cmd.args).stdin(Stdio::null());
        match mode {
            OutputMode::Capture => {
                command.stdout(Stdio::piped()).stderr(Stdio::piped());
            }
            OutputMode::Discard => {
                command.stdout(Stdio::null()).stderr(Stdio::null());
            }
            OutputMode::Inherit => {
                command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
        }

        let launch_err =
            |source: std::io::Error| ToolError::Launch { program: cmd.program.clone(), source };
        let child = command.spawn().map_err(launch_err)?;
        let output = child.wait_with_output().await.map_err(launch_err)?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                program: cmd.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let cmd = Invocation::new("subfinder").arg("-d").arg("example.com");
        assert_eq!(cmd.to_string(), "subfinder -d example.com");
        assert_eq!(cmd.flag_value("-d"), Some("example.com"));
        assert_eq!(cmd.flag_value("-o"), None);
    }

    #[test]
    fn failed_error_mentions_status_and_stderr() {
        let err = ToolError::Failed { program: "httpx".into(), code: Some(2), stderr: "bad flag\n".into() };
        assert_eq!(err.to_string(), "httpx exited with status 2: bad flag");

        let err = ToolError::Failed { program: "ffuf".into(), code: None, stderr: String::new() };
        assert_eq!(err.to_string(), "ffuf exited with a signal");
    }

    #[tokio::test]
    async fn missing_binary_is_a_launch_error() {
        let cmd = Invocation::new("subfuf-definitely-not-a-real-binary");
        let err = SystemRunner.run(&cmd, OutputMode::Capture).await.unwrap_err();
        assert!(matches!(err, ToolError::Launch { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn capture_returns_stdout_and_reports_exit_codes() {
        let echo = Invocation::new("sh").arg("-c").arg("printf 'a.example.com\\nb.example.com\\n'");
        let out = SystemRunner.run(&echo, OutputMode::Capture).await.unwrap();
        assert_eq!(out, "a.example.com\nb.example.com\n");

        let fail = Invocation::new("sh").arg("-c").arg("echo oops >&2; exit 3");
        match SystemRunner.run(&fail, OutputMode::Capture).await {
            Err(ToolError::Failed { code, stderr, .. }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr.trim(), "oops");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
