use std::path::Path;

use serde::Deserialize;
use which::which;

use crate::external::runner::{Invocation, ToolError};

/// Token bound to the live-hosts wordlist.
pub const FUZZ1: &str = "FUZZ1";
/// Token bound to the user-supplied wordlist.
pub const FUZZ2: &str = "FUZZ2";
/// Both tokens glued together as the host name.
pub const FFUF_URL_TEMPLATE: &str = "https://FUZZ1FUZZ2";
pub const FFUF_MODE: &str = "clusterbomb";
pub const FFUF_MATCH_CODES: &str = "200,403";

/// Program names (or absolute paths) for the three external tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    pub subfinder: String,
    pub httpx: String,
    pub ffuf: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            subfinder: "subfinder".to_string(),
            httpx: "httpx".to_string(),
            ffuf: "ffuf".to_string(),
        }
    }
}

impl ToolPaths {
    /// `subfinder -d <domain>`
    pub fn subfinder(&self, domain: &str) -> Invocation {
        Invocation::new(&self.subfinder).arg("-d").arg(domain)
    }

    /// `httpx -l <input> -o <output>`
    pub fn httpx(&self, input: &Path, output: &Path) -> Invocation {
        Invocation::new(&self.httpx)
            .arg("-l")
            .arg(path_arg(input))
            .arg("-o")
            .arg(path_arg(output))
    }

    /// `ffuf -w <fuzz1>:FUZZ1 -w <fuzz2>:FUZZ2 -u https://FUZZ1FUZZ2 -mode clusterbomb`
    /// `-mc 200,403 -c [-o <output>]`
    pub fn ffuf(&self, fuzz1: &Path, fuzz2: &Path, output: Option<&Path>) -> Invocation {
        let cmd = Invocation::new(&self.ffuf)
            .arg("-w")
            .arg(format!("{}:{}", fuzz1.display(), FUZZ1))
            .arg("-w")
            .arg(format!("{}:{}", fuzz2.display(), FUZZ2))
            .arg("-u")
            .arg(FFUF_URL_TEMPLATE)
            .arg("-mode")
            .arg(FFUF_MODE)
            .arg("-mc")
            .arg(FFUF_MATCH_CODES)
            .arg("-c");
        match output {
            Some(out) => cmd.arg("-o").arg(path_arg(out)),
            None => cmd,
        }
    }

    /// Resolve every tool through PATH before anything runs.
    pub fn ensure_available(&self) -> Result<(), ToolError> {
        for program in [&self.subfinder, &self.httpx, &self.ffuf] {
            let found = which(program)
                .map_err(|source| ToolError::NotFound { program: program.clone(), source })?;
            tracing::debug!(program = %program, path = %found.display(), "tool located");
        }
        Ok(())
    }
}

fn path_arg(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}
