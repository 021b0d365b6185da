use crate::cli::Cli;
use subfuf::external::SystemRunner;
use subfuf::{Config, Pipeline, RunOptions};

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Our crate at the requested level; progress lines and ffuf output go to
    // the console regardless.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!("subfuf={crate}", crate = crate_level);
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_optional(cli.config.as_deref())?;
    config.tools.ensure_available()?;

    let opts = RunOptions {
        subdomains_out: cli.subdomains_out(),
        domains: cli.domains,
        fuzz2: cli.fuzz2,
        output: cli.output,
    };
    tracing::info!(
        domains = %opts.domains.display(),
        fuzz2 = %opts.fuzz2.display(),
        subdomains_out = ?opts.subdomains_out,
        output = ?opts.output,
        "Starting pipeline"
    );

    Pipeline::new(SystemRunner, config.tools).run(&opts).await
}
