use std::path::PathBuf;

use clap::Parser;

/// Enumerate subdomains with subfinder, keep the live ones with httpx, then
/// clusterbomb them with ffuf.
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to domains file
    #[arg(short = 'd', long = "domains", value_name = "FILE")]
    pub domains: PathBuf,

    /// Path to FUZZ2 wordlist for ffuf
    #[arg(short = 'f', long = "fuzz2", value_name = "FILE")]
    pub fuzz2: PathBuf,

    /// Output file for live subdomains (pass an empty value to skip saving)
    #[arg(
        short = 's',
        long = "subdomains",
        value_name = "FILE",
        default_value = "subdomains.txt"
    )]
    pub subdomains: String,

    /// Output file for final results (if not set, results are printed to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// JSON file overriding the subfinder/httpx/ffuf program paths
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// `-s` target, unless it was explicitly emptied.
    pub fn subdomains_out(&self) -> Option<PathBuf> {
        if self.subdomains.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.subdomains))
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
